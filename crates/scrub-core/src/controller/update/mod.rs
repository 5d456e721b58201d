use super::{Message, ScrubController};
use crate::preload::MediaSource;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod input;
mod media;
mod pager;
mod tick;

/// Describes work that must be performed by the host outside the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[ts(export)]
pub enum Effect {
    /// Give the first video section a full-viewport minimum height.
    PinFirstSection,
    AttachSource {
        source: MediaSource,
    },
    /// Ask the primary video to start buffering.
    LoadMedia,
    /// The current wheel event was consumed; cancel its default scrolling.
    SuppressNativeScroll,
    /// Deliver one `FrameTick` on the next display frame.
    RequestFrame,
    Seek {
        time: f64,
    },
    ScrollToTop,
    MarkOverlayLoaded,
    /// Deliver `OverlayRemovalDue` after the delay.
    ScheduleOverlayRemoval {
        delay_ms: u32,
    },
    RemoveOverlayFromLayout,
    /// Smoothly scroll the section at `index` to the viewport top.
    ScrollSectionIntoView {
        index: usize,
    },
}

impl ScrubController {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Wheel { delta_y } => self.handle_wheel(delta_y, &mut effects),
            Message::TouchStart { client_y } => self.handle_touch_start(client_y),
            Message::TouchMove { client_y } => self.handle_touch_move(client_y, &mut effects),
            Message::FrameTick { media_time } => self.handle_frame_tick(media_time, &mut effects),
            Message::MediaReady {
                duration,
                ready_state,
            } => self.handle_media_ready(duration, ready_state, &mut effects),
            Message::MediaFailed { detail } => self.handle_media_failed(&detail),
            Message::OverlayRemovalDue => self.handle_overlay_removal_due(&mut effects),
            Message::PagerPrevious { sections } => {
                self.handle_pager_previous(sections, &mut effects)
            }
            Message::PagerNext { sections } => self.handle_pager_next(sections, &mut effects),
        }

        effects
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::super::ScrubController;
    use super::Effect;
    use crate::config::AppConfig;
    use crate::preferences::UserPreferences;
    use crate::preload::MediaCandidates;

    pub(crate) fn candidates() -> MediaCandidates {
        MediaCandidates {
            mp4: Some("media/hero.mp4".to_string()),
            webm: Some("media/hero.webm".to_string()),
        }
    }

    /// Controller with default config whose video has already buffered.
    pub(crate) fn ready_controller() -> ScrubController {
        let (mut controller, _) = ScrubController::start(
            AppConfig::default(),
            UserPreferences::default(),
            Some(candidates()),
        );
        controller.update(super::Message::MediaReady {
            duration: 15.0,
            ready_state: 4,
        });
        controller
    }

    pub(crate) fn count(effects: &[Effect], wanted: &Effect) -> usize {
        effects.iter().filter(|effect| *effect == wanted).count()
    }
}
