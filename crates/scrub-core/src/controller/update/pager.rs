use super::super::ScrubController;
use super::super::state::LockState;
use super::Effect;
use crate::pager::{FrameSequence, PagerDirection, SectionBounds};
use tracing::{debug, info};

impl ScrubController {
    pub(super) fn handle_pager_previous(
        &mut self,
        sections: Vec<SectionBounds>,
        effects: &mut Vec<Effect>,
    ) {
        self.navigate(FrameSequence::new(sections), PagerDirection::Previous, effects);
    }

    /// While locked, "next" skips straight to the end of the clip instead of
    /// navigating.
    pub(super) fn handle_pager_next(
        &mut self,
        sections: Vec<SectionBounds>,
        effects: &mut Vec<Effect>,
    ) {
        if self.lock == LockState::Locked {
            self.scrub.offset = self.mapping.scroll_range();
            self.lock = LockState::Unlocked;
            info!("Skipped scrub; page can now scroll normally");
            return;
        }
        self.navigate(FrameSequence::new(sections), PagerDirection::Next, effects);
    }

    fn navigate(
        &self,
        frames: FrameSequence,
        direction: PagerDirection,
        effects: &mut Vec<Effect>,
    ) {
        match frames.adjacent(direction) {
            Some(index) => {
                debug!(?direction, index, "Scrolling to section");
                effects.push(Effect::ScrollSectionIntoView { index });
            }
            None => debug!(
                ?direction,
                sections = frames.len(),
                "No adjacent section to scroll to"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Message;
    use super::super::test_support::*;
    use super::*;

    fn sections(scroll_y: f64) -> Vec<SectionBounds> {
        (0..3)
            .map(|i| {
                let top = f64::from(i) * 900.0 - scroll_y;
                SectionBounds {
                    top,
                    bottom: top + 900.0,
                }
            })
            .collect()
    }

    #[test]
    fn next_while_locked_skips_to_end() {
        let mut controller = ready_controller();
        controller.on_wheel_delta(500.0 / 0.6);
        assert!((controller.offset() - 500.0).abs() < 1e-9);

        let effects = controller.update(Message::PagerNext {
            sections: sections(0.0),
        });
        assert!(effects.is_empty());
        assert_eq!(controller.offset(), 3000.0);
        assert_eq!(controller.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn next_skips_even_before_media_is_ready() {
        let (mut controller, _) = crate::controller::ScrubController::start(
            crate::config::AppConfig::default(),
            crate::preferences::UserPreferences::default(),
            Some(candidates()),
        );
        controller.update(Message::PagerNext {
            sections: sections(0.0),
        });
        assert_eq!(controller.lock_state(), LockState::Unlocked);
    }

    #[test]
    fn next_after_unlock_scrolls_to_following_section() {
        let mut controller = ready_controller();
        controller.update(Message::PagerNext {
            sections: Vec::new(),
        });
        let effects = controller.update(Message::PagerNext {
            sections: sections(100.0),
        });
        assert_eq!(effects, vec![Effect::ScrollSectionIntoView { index: 1 }]);
    }

    #[test]
    fn previous_works_while_locked() {
        let mut controller = ready_controller();
        let effects = controller.update(Message::PagerPrevious {
            sections: sections(1000.0),
        });
        assert_eq!(effects, vec![Effect::ScrollSectionIntoView { index: 0 }]);
        assert_eq!(controller.lock_state(), LockState::Locked);
    }

    #[test]
    fn boundaries_do_nothing() {
        let mut controller = ready_controller();
        assert!(
            controller
                .update(Message::PagerPrevious {
                    sections: sections(0.0),
                })
                .is_empty()
        );
        controller.update(Message::PagerNext {
            sections: Vec::new(),
        });
        assert!(
            controller
                .update(Message::PagerNext {
                    sections: sections(2000.0),
                })
                .is_empty()
        );
    }
}
