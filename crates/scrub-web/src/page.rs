//! Wires DOM events to the controller and carries out its effects.

use crate::dom::DomPage;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use gloo::timers::callback::Timeout;
use scrub_core::{Effect, Message, ScrubController, ScrubSnapshot};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, TouchEvent, WheelEvent};

/// Listener and timer handles are held here; the page itself is kept for
/// the document lifetime, so dropping any of them cancels the callback.
pub(crate) struct ScrubPage {
    controller: RefCell<ScrubController>,
    dom: DomPage,
    listeners: RefCell<Vec<EventListener>>,
    frame_handle: RefCell<Option<AnimationFrame>>,
    overlay_timer: RefCell<Option<Timeout>>,
}

impl ScrubPage {
    pub(crate) fn new(controller: ScrubController, dom: DomPage) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(controller),
            dom,
            listeners: RefCell::new(Vec::new()),
            frame_handle: RefCell::new(None),
            overlay_timer: RefCell::new(None),
        })
    }

    pub(crate) fn snapshot(&self) -> ScrubSnapshot {
        self.controller.borrow().snapshot()
    }

    /// Feed one message through the controller. Returns true when the input
    /// was consumed and its default action should be cancelled.
    pub(crate) fn dispatch(self: &Rc<Self>, message: Message) -> bool {
        let effects = self.controller.borrow_mut().update(message);
        self.run_effects(effects)
    }

    pub(crate) fn run_effects(self: &Rc<Self>, effects: Vec<Effect>) -> bool {
        let mut consumed = false;
        for effect in effects {
            match effect {
                Effect::PinFirstSection => self.dom.pin_first_section(),
                Effect::AttachSource { source } => self.dom.attach_source(&source),
                Effect::LoadMedia => self.dom.load_media(),
                Effect::SuppressNativeScroll => consumed = true,
                Effect::RequestFrame => self.request_frame(),
                Effect::Seek { time } => self.dom.seek(time),
                Effect::ScrollToTop => self.dom.scroll_to_top(),
                Effect::MarkOverlayLoaded => self.dom.mark_overlay_loaded(),
                Effect::ScheduleOverlayRemoval { delay_ms } => {
                    self.schedule_overlay_removal(delay_ms)
                }
                Effect::RemoveOverlayFromLayout => self.dom.remove_overlay_from_layout(),
                Effect::ScrollSectionIntoView { index } => {
                    self.dom.scroll_section_into_view(index)
                }
            }
        }
        consumed
    }

    // The controller requests at most one frame until its tick runs.
    fn request_frame(self: &Rc<Self>) {
        if self.frame_handle.borrow().is_some() {
            return;
        }
        let page = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            page.frame_handle.borrow_mut().take();
            let media_time = page.dom.media_time();
            page.dispatch(Message::FrameTick { media_time });
        });
        *self.frame_handle.borrow_mut() = Some(handle);
    }

    fn schedule_overlay_removal(self: &Rc<Self>, delay_ms: u32) {
        let page = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            page.dispatch(Message::OverlayRemovalDue);
        });
        *self.overlay_timer.borrow_mut() = Some(timeout);
    }

    /// Register every listener and keep the handles on the page.
    pub(crate) fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();
        let window: &EventTarget = self.dom.window.as_ref();

        let page = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            window,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                if page.dispatch(Message::Wheel {
                    delta_y: wheel.delta_y(),
                }) {
                    event.prevent_default();
                }
            },
        ));

        let page = Rc::clone(self);
        listeners.push(EventListener::new(window, "touchstart", move |event| {
            if let Some(client_y) = first_touch_y(event) {
                page.dispatch(Message::TouchStart { client_y });
            }
        }));

        let page = Rc::clone(self);
        listeners.push(EventListener::new(window, "touchmove", move |event| {
            if let Some(client_y) = first_touch_y(event) {
                page.dispatch(Message::TouchMove { client_y });
            }
        }));

        if let Some(video) = &self.dom.video {
            let page = Rc::clone(self);
            let ready_video = video.clone();
            listeners.push(EventListener::once(video, "canplaythrough", move |_| {
                page.dispatch(Message::MediaReady {
                    duration: ready_video.duration(),
                    ready_state: ready_video.ready_state(),
                });
            }));

            let page = Rc::clone(self);
            let failed_video = video.clone();
            listeners.push(EventListener::new(video, "error", move |_| {
                let detail = failed_video
                    .error()
                    .map(|err| format!("code {}: {}", err.code(), err.message()))
                    .unwrap_or_else(|| "unknown media error".to_string());
                page.dispatch(Message::MediaFailed { detail });
            }));
        }

        if let Some(button) = &self.dom.prev_button {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(button, "click", move |_| {
                let sections = page.dom.section_bounds();
                page.dispatch(Message::PagerPrevious { sections });
            }));
        }

        if let Some(button) = &self.dom.next_button {
            let page = Rc::clone(self);
            listeners.push(EventListener::new(button, "click", move |_| {
                let sections = page.dom.section_bounds();
                page.dispatch(Message::PagerNext { sections });
            }));
        }

        debug!(count = listeners.len(), "Listeners installed");
        self.listeners.borrow_mut().extend(listeners);
    }
}

fn first_touch_y(event: &Event) -> Option<f64> {
    event
        .dyn_ref::<TouchEvent>()?
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_y()))
}
