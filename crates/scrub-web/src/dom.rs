//! Handles to the page elements the controller reads from and writes to.

use scrub_core::config::AppConfig;
use scrub_core::pager::SectionBounds;
use scrub_core::preferences::UserPreferences;
use scrub_core::preload::{MediaCandidates, MediaSource};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, HtmlSourceElement, HtmlVideoElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

pub(crate) const INLINE_CONFIG_ID: &str = "scrub-config";

pub(crate) struct DomPage {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) first_section: Option<HtmlElement>,
    pub(crate) video: Option<HtmlVideoElement>,
    pub(crate) overlay: Option<HtmlElement>,
    pub(crate) prev_button: Option<Element>,
    pub(crate) next_button: Option<Element>,
    frames: Vec<Element>,
}

impl DomPage {
    pub(crate) fn discover(window: Window, config: &AppConfig) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;

        let first_section = document.query_selector(&config.video_section_selector)?;
        let video = match &first_section {
            Some(section) => section
                .query_selector("video")?
                .and_then(|element| element.dyn_into::<HtmlVideoElement>().ok()),
            None => None,
        };
        let overlay = document
            .get_element_by_id(&config.overlay_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let prev_button = document.query_selector(&config.prev_selector)?;
        let next_button = document.query_selector(&config.next_selector)?;

        let nodes = document.query_selector_all(&config.frame_selector)?;
        let frames = (0..nodes.length())
            .filter_map(|idx| nodes.get(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect::<Vec<_>>();

        debug!(
            has_video = video.is_some(),
            has_overlay = overlay.is_some(),
            frames = frames.len(),
            "Discovered page elements"
        );

        Ok(Self {
            window,
            document,
            first_section: first_section.and_then(|section| section.dyn_into::<HtmlElement>().ok()),
            video,
            overlay,
            prev_button,
            next_button,
            frames,
        })
    }

    pub(crate) fn preferences(&self) -> UserPreferences {
        let reduced_motion = self
            .window
            .match_media(UserPreferences::REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);

        let navigator: JsValue = self.window.navigator().into();
        let save_data = js_sys::Reflect::get(&navigator, &JsValue::from_str("connection"))
            .ok()
            .filter(|connection| connection.is_object())
            .and_then(|connection| {
                js_sys::Reflect::get(&connection, &JsValue::from_str("saveData")).ok()
            })
            .and_then(|value| value.as_bool())
            .unwrap_or(false);

        UserPreferences {
            reduced_motion,
            save_data,
        }
    }

    pub(crate) fn candidates(&self) -> Option<MediaCandidates> {
        self.video.as_ref().map(|video| MediaCandidates {
            mp4: video.get_attribute("data-mp4"),
            webm: video.get_attribute("data-webm"),
        })
    }

    pub(crate) fn media_time(&self) -> f64 {
        self.video
            .as_ref()
            .map(|video| video.current_time())
            .unwrap_or(0.0)
    }

    pub(crate) fn section_bounds(&self) -> Vec<SectionBounds> {
        self.frames
            .iter()
            .map(|frame| {
                let rect = frame.get_bounding_client_rect();
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                }
            })
            .collect()
    }

    pub(crate) fn pin_first_section(&self) {
        if let Some(section) = &self.first_section {
            if let Err(err) = section.style().set_property("min-height", "100vh") {
                warn!(?err, "Failed to pin first section height");
            }
        }
    }

    pub(crate) fn attach_source(&self, source: &MediaSource) {
        let Some(video) = &self.video else {
            return;
        };
        let attached = self
            .document
            .create_element("source")
            .and_then(|element| {
                element
                    .dyn_into::<HtmlSourceElement>()
                    .map_err(JsValue::from)
            })
            .and_then(|element| {
                element.set_src(&source.url);
                element.set_type(&source.mime);
                video.append_child(&element)
            });
        if let Err(err) = attached {
            warn!(url = %source.url, ?err, "Failed to attach video source");
        }
    }

    pub(crate) fn load_media(&self) {
        if let Some(video) = &self.video {
            video.load();
        }
    }

    pub(crate) fn seek(&self, time: f64) {
        if let Some(video) = &self.video {
            video.set_current_time(time);
        }
    }

    pub(crate) fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    pub(crate) fn mark_overlay_loaded(&self) {
        if let Some(overlay) = &self.overlay {
            if let Err(err) = overlay.class_list().add_1("loaded") {
                warn!(?err, "Failed to mark loading overlay");
            }
        }
    }

    pub(crate) fn remove_overlay_from_layout(&self) {
        if let Some(overlay) = &self.overlay {
            if let Err(err) = overlay.style().set_property("display", "none") {
                warn!(?err, "Failed to hide loading overlay");
            }
        }
    }

    pub(crate) fn scroll_section_into_view(&self, index: usize) {
        let Some(frame) = self.frames.get(index) else {
            warn!(index, "Section index out of range");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        frame.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// TOML from `<script type="application/toml" id="scrub-config">`, if any.
    pub(crate) fn inline_config(window: &Window) -> Option<String> {
        window
            .document()?
            .get_element_by_id(INLINE_CONFIG_ID)?
            .text_content()
    }
}
