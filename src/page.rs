//! Headless page that carries out controller effects.
//!
//! Geometry is a vertical stack of sections; the media element, overlay and
//! timers are plain fields so a replay can be inspected afterwards.

use crate::script::{EventKind, PageSpec};
use scrub_core::config::AppConfig;
use scrub_core::pager::SectionBounds;
use scrub_core::preferences::UserPreferences;
use scrub_core::preload::{MediaCandidates, MediaSource};
use scrub_core::{Effect, Message, ScrubController, ScrubSnapshot};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
struct SimulatedMedia {
    sources: Vec<MediaSource>,
    load_requested: bool,
    current_time: f64,
    seeks: u32,
}

#[derive(Debug, Clone, Copy)]
struct OverlayState {
    loaded: bool,
    displayed: bool,
}

/// End-of-replay summary printed by the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub controller: ScrubSnapshot,
    pub elapsed_ms: u64,
    pub scroll_y: f64,
    pub media_time: f64,
    pub seeks: u32,
    pub load_requested: bool,
    pub attached_sources: Vec<MediaSource>,
    pub first_section_pinned: bool,
    pub overlay_loaded: Option<bool>,
    pub overlay_displayed: Option<bool>,
    pub suppressed_wheel_events: u32,
    pub section_scrolls: Vec<usize>,
}

pub struct SimulatedPage {
    controller: ScrubController,
    has_video_section: bool,
    has_video: bool,
    now_ms: u64,
    viewport_height: f64,
    section_heights: Vec<f64>,
    scroll_y: f64,
    last_touch_y: f64,
    media: SimulatedMedia,
    overlay: Option<OverlayState>,
    first_section_pinned: bool,
    frame_requested: bool,
    timers: Vec<(u64, Message)>,
    suppressed_wheel_events: u32,
    section_scrolls: Vec<usize>,
}

impl SimulatedPage {
    pub fn new(config: AppConfig, setup: &PageSpec) -> Self {
        let preferences = UserPreferences {
            reduced_motion: setup.reduced_motion,
            save_data: setup.save_data,
        };
        let has_video = setup.has_video_section && setup.has_video;
        let candidates = has_video.then(|| MediaCandidates {
            mp4: setup.mp4.clone(),
            webm: setup.webm.clone(),
        });
        let (controller, effects) = ScrubController::start(config, preferences, candidates);

        let mut page = Self {
            controller,
            has_video_section: setup.has_video_section,
            has_video,
            now_ms: 0,
            viewport_height: setup.viewport_height.max(0.0),
            section_heights: setup.section_heights.clone(),
            scroll_y: 0.0,
            last_touch_y: 0.0,
            media: SimulatedMedia::default(),
            overlay: setup.has_overlay.then_some(OverlayState {
                loaded: false,
                displayed: true,
            }),
            first_section_pinned: false,
            frame_requested: false,
            timers: Vec::new(),
            suppressed_wheel_events: 0,
            section_scrolls: Vec::new(),
        };
        page.apply(effects);
        page
    }

    pub fn play(&mut self, event: &EventKind) {
        debug!(?event, at_ms = self.now_ms, "Replaying event");
        match event {
            EventKind::MediaReady {
                duration,
                ready_state,
            } => {
                if self.has_video {
                    self.dispatch(Message::MediaReady {
                        duration: *duration,
                        ready_state: *ready_state,
                    });
                }
            }
            EventKind::MediaError { detail } => {
                if self.has_video {
                    self.dispatch(Message::MediaFailed {
                        detail: detail.clone(),
                    });
                }
            }
            EventKind::Wheel { delta_y } => {
                let consumed = self.dispatch(Message::Wheel { delta_y: *delta_y });
                if consumed {
                    self.suppressed_wheel_events += 1;
                } else {
                    self.scroll_natively(*delta_y);
                }
            }
            EventKind::TouchStart { client_y } => {
                self.last_touch_y = *client_y;
                self.dispatch(Message::TouchStart {
                    client_y: *client_y,
                });
            }
            EventKind::TouchMove { client_y } => {
                let delta = self.last_touch_y - client_y;
                self.last_touch_y = *client_y;
                let before = self.controller.offset();
                self.dispatch(Message::TouchMove {
                    client_y: *client_y,
                });
                // Touch listeners are passive, so the page still moves unless
                // the controller pins it back on the next frame.
                if self.controller.offset() == before {
                    self.scroll_natively(delta);
                }
            }
            EventKind::Frame => self.run_frame(),
            EventKind::Wait { ms } => self.advance_clock(*ms),
            EventKind::Prev => {
                let sections = self.section_bounds();
                self.dispatch(Message::PagerPrevious { sections });
            }
            EventKind::Next => {
                let sections = self.section_bounds();
                self.dispatch(Message::PagerNext { sections });
            }
        }
    }

    pub fn report(&self) -> PageReport {
        PageReport {
            controller: self.controller.snapshot(),
            elapsed_ms: self.now_ms,
            scroll_y: self.scroll_y,
            media_time: self.media.current_time,
            seeks: self.media.seeks,
            load_requested: self.media.load_requested,
            attached_sources: self.media.sources.clone(),
            first_section_pinned: self.first_section_pinned,
            overlay_loaded: self.overlay.map(|overlay| overlay.loaded),
            overlay_displayed: self.overlay.map(|overlay| overlay.displayed),
            suppressed_wheel_events: self.suppressed_wheel_events,
            section_scrolls: self.section_scrolls.clone(),
        }
    }

    /// Returns true when the controller consumed the input.
    fn dispatch(&mut self, message: Message) -> bool {
        let effects = self.controller.update(message);
        let consumed = effects.contains(&Effect::SuppressNativeScroll);
        self.apply(effects);
        consumed
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PinFirstSection => self.first_section_pinned = self.has_video_section,
                Effect::AttachSource { source } => self.media.sources.push(source),
                Effect::LoadMedia => self.media.load_requested = true,
                Effect::SuppressNativeScroll => {}
                Effect::RequestFrame => self.frame_requested = true,
                Effect::Seek { time } => {
                    self.media.current_time = time;
                    self.media.seeks += 1;
                }
                Effect::ScrollToTop => self.scroll_y = 0.0,
                Effect::MarkOverlayLoaded => {
                    if let Some(overlay) = self.overlay.as_mut() {
                        overlay.loaded = true;
                    }
                }
                Effect::ScheduleOverlayRemoval { delay_ms } => {
                    let due = self.now_ms + u64::from(delay_ms);
                    self.timers.push((due, Message::OverlayRemovalDue));
                }
                Effect::RemoveOverlayFromLayout => {
                    if let Some(overlay) = self.overlay.as_mut() {
                        overlay.displayed = false;
                    }
                }
                Effect::ScrollSectionIntoView { index } => {
                    let top = self
                        .section_heights
                        .iter()
                        .take(index)
                        .fold(0.0, |acc, height| acc + height);
                    self.scroll_y = top.clamp(0.0, self.max_scroll());
                    self.section_scrolls.push(index);
                }
            }
        }
    }

    fn run_frame(&mut self) {
        if !std::mem::take(&mut self.frame_requested) {
            return;
        }
        self.dispatch(Message::FrameTick {
            media_time: self.media.current_time,
        });
    }

    fn advance_clock(&mut self, ms: u64) {
        self.now_ms += ms;
        let now = self.now_ms;
        let (due, pending): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|(at, _)| *at <= now);
        self.timers = pending;
        for (at, message) in due {
            info!(at_ms = at, "Timer fired");
            self.dispatch(message);
        }
    }

    fn scroll_natively(&mut self, delta: f64) {
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.max_scroll());
    }

    fn max_scroll(&self) -> f64 {
        let content: f64 = self.section_heights.iter().sum();
        (content - self.viewport_height).max(0.0)
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        let mut top = -self.scroll_y;
        self.section_heights
            .iter()
            .map(|height| {
                let bounds = SectionBounds {
                    top,
                    bottom: top + height,
                };
                top += height;
                bounds
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::LockState;

    fn layout() -> PageSpec {
        PageSpec {
            mp4: Some("media/hero.mp4".to_string()),
            webm: Some("media/hero.webm".to_string()),
            ..PageSpec::default()
        }
    }

    fn page() -> SimulatedPage {
        SimulatedPage::new(AppConfig::default(), &layout())
    }

    fn ready_page() -> SimulatedPage {
        let mut page = page();
        page.play(&EventKind::MediaReady {
            duration: 15.0,
            ready_state: 4,
        });
        page
    }

    #[test]
    fn startup_preloads_both_sources() {
        let report = page().report();
        assert!(report.first_section_pinned);
        assert!(report.load_requested);
        let urls: Vec<_> = report
            .attached_sources
            .iter()
            .map(|source| source.url.as_str())
            .collect();
        assert_eq!(urls, ["media/hero.mp4", "media/hero.webm"]);
        assert!(report.controller.interaction_blocked);
    }

    #[test]
    fn overlay_leaves_layout_after_delay() {
        let mut page = ready_page();
        let report = page.report();
        assert!(!report.controller.interaction_blocked);
        assert_eq!(report.overlay_loaded, Some(true));
        assert_eq!(report.overlay_displayed, Some(true));

        page.play(&EventKind::Wait { ms: 499 });
        assert_eq!(page.report().overlay_displayed, Some(true));
        page.play(&EventKind::Wait { ms: 1 });
        assert_eq!(page.report().overlay_displayed, Some(false));
    }

    #[test]
    fn scrubbing_pins_page_then_releases_it() {
        let mut page = ready_page();
        page.play(&EventKind::Wheel { delta_y: 500.0 });
        page.play(&EventKind::Frame);
        let report = page.report();
        assert_eq!(report.scroll_y, 0.0);
        assert_eq!(report.suppressed_wheel_events, 1);
        assert!(report.media_time > 0.0);
        assert_eq!(report.controller.lock, LockState::Locked);

        for _ in 0..9 {
            page.play(&EventKind::Wheel { delta_y: 500.0 });
            page.play(&EventKind::Frame);
        }
        assert_eq!(page.report().controller.lock, LockState::Unlocked);

        page.play(&EventKind::Wheel { delta_y: 300.0 });
        let report = page.report();
        assert_eq!(report.scroll_y, 300.0);
        assert!(report.controller.offset >= 3000.0);
    }

    #[test]
    fn frame_without_request_does_nothing() {
        let mut page = ready_page();
        page.play(&EventKind::Frame);
        assert_eq!(page.report().seeks, 0);
    }

    #[test]
    fn next_while_locked_skips_without_section_scroll() {
        let mut page = ready_page();
        page.play(&EventKind::Wheel {
            delta_y: 500.0 / 0.6,
        });
        page.play(&EventKind::Next);
        let report = page.report();
        assert_eq!(report.controller.lock, LockState::Unlocked);
        assert_eq!(report.controller.offset, 3000.0);
        assert!(report.section_scrolls.is_empty());

        page.play(&EventKind::Next);
        let report = page.report();
        assert_eq!(report.section_scrolls, vec![1]);
        assert_eq!(report.scroll_y, 900.0);

        page.play(&EventKind::Prev);
        assert_eq!(page.report().scroll_y, 0.0);
    }

    #[test]
    fn reduced_motion_leaves_native_scrolling() {
        let setup = PageSpec {
            reduced_motion: true,
            ..layout()
        };
        let mut page = SimulatedPage::new(AppConfig::default(), &setup);
        page.play(&EventKind::MediaReady {
            duration: 15.0,
            ready_state: 4,
        });
        page.play(&EventKind::Wheel { delta_y: 200.0 });
        page.play(&EventKind::Frame);
        let report = page.report();
        assert!(!report.controller.active);
        assert!(report.attached_sources.is_empty());
        assert!(!report.first_section_pinned);
        assert_eq!(report.overlay_loaded, Some(false));
        assert_eq!(report.scroll_y, 200.0);
        assert_eq!(report.controller.offset, 0.0);
    }

    #[test]
    fn media_error_keeps_page_native() {
        let mut page = page();
        page.play(&EventKind::MediaError {
            detail: "decode".to_string(),
        });
        page.play(&EventKind::Wheel { delta_y: 150.0 });
        let report = page.report();
        assert!(report.controller.interaction_blocked);
        assert_eq!(report.scroll_y, 150.0);
        assert_eq!(report.suppressed_wheel_events, 0);
    }

    #[test]
    fn touch_scrub_advances_video() {
        let mut page = ready_page();
        page.play(&EventKind::TouchStart { client_y: 800.0 });
        page.play(&EventKind::TouchMove { client_y: 200.0 });
        page.play(&EventKind::Frame);
        let report = page.report();
        assert_eq!(report.controller.offset, 600.0);
        assert_eq!(report.scroll_y, 0.0);
        assert!(report.seeks >= 1);
    }

    #[test]
    fn prev_to_first_section_reports_positive_zero() {
        let mut page = ready_page();
        page.play(&EventKind::Wheel {
            delta_y: 500.0 / 0.6,
        });
        page.play(&EventKind::Next);
        page.play(&EventKind::Next);
        page.play(&EventKind::Prev);
        let report = page.report();
        assert_eq!(report.section_scrolls, vec![1, 0]);
        assert!(report.scroll_y.is_sign_positive());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"scroll_y\":0.0"));
    }

    #[test]
    fn video_section_is_pinned_without_video() {
        let setup = PageSpec {
            has_video: false,
            ..layout()
        };
        let report = SimulatedPage::new(AppConfig::default(), &setup).report();
        assert!(report.first_section_pinned);
        assert!(report.attached_sources.is_empty());
        assert!(!report.load_requested);
    }

    #[test]
    fn missing_video_section_pins_nothing() {
        let setup = PageSpec {
            has_video_section: false,
            ..layout()
        };
        let report = SimulatedPage::new(AppConfig::default(), &setup).report();
        assert!(!report.first_section_pinned);
        assert!(report.attached_sources.is_empty());
    }
}
