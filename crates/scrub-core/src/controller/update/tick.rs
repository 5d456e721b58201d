use super::super::ScrubController;
use super::super::state::LockState;
use super::Effect;
use tracing::{debug, info};

impl ScrubController {
    pub(super) fn handle_frame_tick(&mut self, media_time: f64, effects: &mut Vec<Effect>) {
        if self.lock == LockState::Locked {
            self.scrub_toward_offset(media_time, effects);
        }
        self.scrub.tick_pending = false;
    }

    fn scrub_toward_offset(&mut self, media_time: f64, effects: &mut Vec<Effect>) {
        let target = self.mapping.target_time(self.scrub.offset);
        self.scrub.current_time = self.mapping.ease_toward(self.scrub.current_time, target);
        let snapped = self.mapping.snap(self.scrub.current_time);

        if self.mapping.needs_seek(media_time, snapped) {
            debug!(from = media_time, to = snapped, "Seeking to frame");
            effects.push(Effect::Seek { time: snapped });
        }

        if self.mapping.reached_end(self.scrub.offset) {
            self.lock = LockState::Unlocked;
            info!(
                offset = self.scrub.offset,
                "Scroll unlocked - page can now scroll normally"
            );
        } else if self.scrub.offset > 0.0 {
            effects.push(Effect::ScrollToTop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn seek_time(effects: &[Effect]) -> Option<f64> {
        effects.iter().find_map(|effect| match effect {
            Effect::Seek { time } => Some(*time),
            _ => None,
        })
    }

    #[test]
    fn tick_eases_snaps_and_pins_page() {
        let mut controller = ready_controller();
        controller.on_wheel_delta(1000.0);
        assert_eq!(controller.offset(), 600.0);

        let effects = controller.on_frame_tick(0.0);
        // target 3.0s, eased to 0.9s, snapped to frame 22.
        let time = seek_time(&effects).unwrap();
        assert!((time - 22.0 / 24.0).abs() < 1e-9);
        assert!(effects.contains(&Effect::ScrollToTop));
        assert!(!controller.snapshot().tick_pending);
    }

    #[test]
    fn no_seek_when_media_is_within_half_a_frame() {
        let mut controller = ready_controller();
        controller.on_wheel_delta(1000.0);
        let effects = controller.on_frame_tick(22.0 / 24.0 - 0.01);
        assert_eq!(seek_time(&effects), None);
        assert!(effects.contains(&Effect::ScrollToTop));
    }

    #[test]
    fn snapped_times_are_frames_inside_clip() {
        let mut controller = ready_controller();
        let mut media_time = 0.0;
        let deltas = [350.0, 91.0, -40.0, 700.0, 13.0, -260.0, 1800.0, 2600.0];
        for delta in deltas {
            controller.on_wheel_delta(delta);
            for _ in 0..4 {
                if let Some(time) = seek_time(&controller.on_frame_tick(media_time)) {
                    let frames = time * 24.0;
                    assert!((frames - frames.round()).abs() < 1e-9, "{time}");
                    assert!((0.0..=15.0).contains(&time));
                    media_time = time;
                }
            }
        }
    }

    #[test]
    fn exactly_full_range_unlocks() {
        let mut controller = ready_controller();
        for _ in 0..50 {
            controller.on_wheel_delta(100.0);
        }
        assert_eq!(controller.offset(), 3000.0);
        assert_eq!(controller.mapping().progress(controller.offset()), 1.0);
        assert_eq!(controller.mapping().target_time(controller.offset()), 15.0);

        let effects = controller.on_frame_tick(0.0);
        assert_eq!(controller.lock_state(), LockState::Unlocked);
        assert!(!effects.contains(&Effect::ScrollToTop));
    }

    #[test]
    fn unlock_happens_once_and_sticks() {
        let mut controller = ready_controller();
        let mut transitions = 0;
        let mut previous = controller.lock_state();
        for step in 0..40 {
            controller.on_wheel_delta(if step % 7 == 3 { -50.0 } else { 160.0 });
            controller.on_frame_tick(0.0);
            let now = controller.lock_state();
            if now != previous {
                transitions += 1;
                assert_eq!(now, LockState::Unlocked);
            }
            previous = now;
        }
        assert_eq!(transitions, 1);
        assert_eq!(controller.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn tick_after_unlock_only_clears_flag() {
        let mut controller = ready_controller();
        controller.on_wheel_delta(6000.0);
        controller.on_frame_tick(0.0);
        let time_before = controller.snapshot().current_time;
        let effects = controller.on_frame_tick(0.0);
        assert!(effects.is_empty());
        assert_eq!(controller.snapshot().current_time, time_before);
        assert!(!controller.snapshot().tick_pending);
    }

    #[test]
    fn zero_offset_does_not_pin_page() {
        let mut controller = ready_controller();
        controller.on_wheel_delta(-100.0);
        let effects = controller.on_frame_tick(0.0);
        assert!(effects.is_empty());
    }
}
