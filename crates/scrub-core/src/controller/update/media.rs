use super::super::ScrubController;
use super::Effect;
use crate::preload::MediaCandidates;
use tracing::{debug, error, info};

impl ScrubController {
    pub(in crate::controller) fn handle_preload(
        &self,
        candidates: &MediaCandidates,
        effects: &mut Vec<Effect>,
    ) {
        let sources = candidates.ordered_sources();
        info!(
            mp4 = candidates.mp4.as_deref().unwrap_or("-"),
            webm = candidates.webm.as_deref().unwrap_or("-"),
            attached = sources.len(),
            "Loading video sources"
        );
        effects.extend(
            sources
                .into_iter()
                .map(|source| Effect::AttachSource { source }),
        );
        effects.push(Effect::LoadMedia);
    }

    pub(super) fn handle_media_ready(
        &mut self,
        duration: f64,
        ready_state: u16,
        effects: &mut Vec<Effect>,
    ) {
        if self.media.ready {
            debug!("Ignoring repeated media ready signal");
            return;
        }
        info!(duration, ready_state, "Video ready");
        self.media.ready = true;
        self.media.interaction_blocked = false;
        self.media.overlay_removal_pending = true;
        effects.push(Effect::MarkOverlayLoaded);
        effects.push(Effect::ScheduleOverlayRemoval {
            delay_ms: self.config.overlay_removal_delay_ms,
        });
    }

    /// Load failures are reported and otherwise ignored: the gate stays closed
    /// and the page keeps native scrolling.
    pub(super) fn handle_media_failed(&self, detail: &str) {
        error!(detail, ready = self.media.ready, "Video load error");
    }

    pub(super) fn handle_overlay_removal_due(&mut self, effects: &mut Vec<Effect>) {
        if std::mem::take(&mut self.media.overlay_removal_pending) {
            effects.push(Effect::RemoveOverlayFromLayout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Message;
    use super::super::test_support::*;
    use super::*;
    use crate::config::AppConfig;
    use crate::preferences::UserPreferences;

    fn started() -> ScrubController {
        ScrubController::start(
            AppConfig::default(),
            UserPreferences::default(),
            Some(candidates()),
        )
        .0
    }

    fn ready_message() -> Message {
        Message::MediaReady {
            duration: 15.0,
            ready_state: 4,
        }
    }

    #[test]
    fn ready_opens_gate_and_hides_overlay() {
        let mut controller = started();
        assert!(controller.snapshot().interaction_blocked);

        let effects = controller.update(ready_message());
        let snapshot = controller.snapshot();
        assert!(!snapshot.interaction_blocked);
        assert!(snapshot.media_ready);
        assert_eq!(
            effects,
            vec![
                Effect::MarkOverlayLoaded,
                Effect::ScheduleOverlayRemoval { delay_ms: 500 }
            ]
        );

        let removal = controller.update(Message::OverlayRemovalDue);
        assert_eq!(removal, vec![Effect::RemoveOverlayFromLayout]);
        assert!(controller.update(Message::OverlayRemovalDue).is_empty());
    }

    #[test]
    fn ready_is_honored_once() {
        let mut controller = started();
        controller.update(ready_message());
        assert!(controller.update(ready_message()).is_empty());
    }

    #[test]
    fn removal_delay_follows_config() {
        let config = AppConfig {
            overlay_removal_delay_ms: 1200,
            ..AppConfig::default()
        };
        let (mut controller, _) =
            ScrubController::start(config, UserPreferences::default(), Some(candidates()));
        let effects = controller.update(ready_message());
        assert!(effects.contains(&Effect::ScheduleOverlayRemoval { delay_ms: 1200 }));
    }

    #[test]
    fn failure_is_logged_only() {
        let mut controller = started();
        let before = controller.snapshot();
        let effects = controller.update(Message::MediaFailed {
            detail: "MEDIA_ERR_SRC_NOT_SUPPORTED".to_string(),
        });
        assert!(effects.is_empty());
        assert_eq!(controller.snapshot(), before);
        assert!(controller.on_wheel_delta(300.0).is_empty());
    }
}
