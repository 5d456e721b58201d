use super::super::ScrubController;
use super::super::state::LockState;
use super::Effect;
use tracing::trace;

impl ScrubController {
    /// Input only drives the video once it has buffered and while locked.
    fn accepts_scrub_input(&self) -> bool {
        !self.media.interaction_blocked && self.lock == LockState::Locked
    }

    pub(super) fn handle_wheel(&mut self, delta_y: f64, effects: &mut Vec<Effect>) {
        if !self.accepts_scrub_input() {
            return;
        }
        self.scrub.offset = self.mapping.apply_wheel(self.scrub.offset, delta_y);
        trace!(
            offset = format_args!("{:.0}", self.scrub.offset),
            time = format_args!("{:.2}", self.scrub.current_time),
            "Virtual scroll"
        );
        effects.push(Effect::SuppressNativeScroll);
        self.schedule_tick(effects);
    }

    pub(super) fn handle_touch_start(&mut self, client_y: f64) {
        self.touch.start(client_y);
    }

    pub(super) fn handle_touch_move(&mut self, client_y: f64, effects: &mut Vec<Effect>) {
        if !self.accepts_scrub_input() {
            return;
        }
        let delta = self.touch.advance(client_y);
        self.scrub.offset = self.mapping.apply_touch(self.scrub.offset, delta);
        self.schedule_tick(effects);
    }

    /// Coalesce bursts of input into a single frame update.
    fn schedule_tick(&mut self, effects: &mut Vec<Effect>) {
        if !self.scrub.tick_pending {
            self.scrub.tick_pending = true;
            effects.push(Effect::RequestFrame);
        }
    }
}
