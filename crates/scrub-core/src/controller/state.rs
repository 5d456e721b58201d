use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Whether input drives the video (locked) or the page (unlocked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ControllerMode {
    Active,
    /// A user preference opted out; every message is ignored.
    Inert,
}

/// Accumulated input and the smoothed playback position derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct ScrubState {
    pub(crate) offset: f64,
    pub(crate) current_time: f64,
    pub(crate) tick_pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MediaState {
    pub(crate) ready: bool,
    /// Closed until the primary video can play through.
    pub(crate) interaction_blocked: bool,
    pub(crate) overlay_removal_pending: bool,
}

impl MediaState {
    pub(crate) fn new() -> Self {
        Self {
            ready: false,
            interaction_blocked: true,
            overlay_removal_pending: false,
        }
    }
}

/// Read-only view of the controller for hosts and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScrubSnapshot {
    pub active: bool,
    pub lock: LockState,
    pub interaction_blocked: bool,
    pub media_ready: bool,
    pub offset: f64,
    pub current_time: f64,
    pub tick_pending: bool,
}
