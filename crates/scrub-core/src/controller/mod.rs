//! The scroll-scrub controller.
//!
//! A single owned struct per page. Hosts feed it [`Message`]s and carry out
//! the [`Effect`]s it returns; the controller itself never touches the DOM.

mod messages;
mod state;
mod update;

pub use messages::Message;
pub use state::{LockState, ScrubSnapshot};
pub use update::Effect;

use crate::config::AppConfig;
use crate::mapping::PlaybackMapping;
use crate::preferences::UserPreferences;
use crate::preload::MediaCandidates;
use crate::touch::TouchTracker;
use state::{ControllerMode, MediaState, ScrubState};
use tracing::{info, warn};

pub struct ScrubController {
    config: AppConfig,
    mapping: PlaybackMapping,
    mode: ControllerMode,
    lock: LockState,
    scrub: ScrubState,
    media: MediaState,
    touch: TouchTracker,
}

impl ScrubController {
    /// Build the controller and the effects that prepare the page.
    ///
    /// `candidates` is `None` when the page has no primary video; the pager
    /// still works but scrubbing never starts.
    pub fn start(
        config: AppConfig,
        preferences: UserPreferences,
        candidates: Option<MediaCandidates>,
    ) -> (Self, Vec<Effect>) {
        let config = config.sanitized();
        let mapping = PlaybackMapping::from_config(&config);
        let mode = if preferences.allows_scrub() {
            ControllerMode::Active
        } else {
            ControllerMode::Inert
        };
        let controller = Self {
            config,
            mapping,
            mode,
            lock: LockState::Locked,
            scrub: ScrubState::default(),
            media: MediaState::new(),
            touch: TouchTracker::default(),
        };

        let mut effects = Vec::new();
        if mode == ControllerMode::Inert {
            info!(
                reduced_motion = preferences.reduced_motion,
                save_data = preferences.save_data,
                "Scrub disabled by user preference; leaving native scrolling alone"
            );
            return (controller, effects);
        }

        effects.push(Effect::PinFirstSection);
        match candidates {
            Some(candidates) => controller.handle_preload(&candidates, &mut effects),
            None => warn!("No primary video found; scrubbing stays disabled"),
        }
        (controller, effects)
    }

    /// Apply one message and return the work the host must perform.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        if self.mode == ControllerMode::Inert {
            return Vec::new();
        }
        self.reduce(message)
    }

    pub fn on_wheel_delta(&mut self, delta_y: f64) -> Vec<Effect> {
        self.update(Message::Wheel { delta_y })
    }

    pub fn on_touch_start(&mut self, client_y: f64) -> Vec<Effect> {
        self.update(Message::TouchStart { client_y })
    }

    pub fn on_touch_move(&mut self, client_y: f64) -> Vec<Effect> {
        self.update(Message::TouchMove { client_y })
    }

    pub fn on_frame_tick(&mut self, media_time: f64) -> Vec<Effect> {
        self.update(Message::FrameTick { media_time })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mapping(&self) -> &PlaybackMapping {
        &self.mapping
    }

    pub fn is_active(&self) -> bool {
        self.mode == ControllerMode::Active
    }

    pub fn lock_state(&self) -> LockState {
        self.lock
    }

    pub fn offset(&self) -> f64 {
        self.scrub.offset
    }

    pub fn snapshot(&self) -> ScrubSnapshot {
        ScrubSnapshot {
            active: self.is_active(),
            lock: self.lock,
            interaction_blocked: self.media.interaction_blocked,
            media_ready: self.media.ready,
            offset: self.scrub.offset,
            current_time: self.scrub.current_time,
            tick_pending: self.scrub.tick_pending,
        }
    }
}
