use crate::pager::SectionBounds;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inputs delivered to the controller by its host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "kebab-case")]
#[ts(export)]
pub enum Message {
    Wheel {
        delta_y: f64,
    },
    TouchStart {
        client_y: f64,
    },
    TouchMove {
        client_y: f64,
    },
    /// One display frame elapsed; carries the element's current playback time.
    FrameTick {
        media_time: f64,
    },
    MediaReady {
        duration: f64,
        ready_state: u16,
    },
    MediaFailed {
        detail: String,
    },
    OverlayRemovalDue,
    PagerPrevious {
        sections: Vec<SectionBounds>,
    },
    PagerNext {
        sections: Vec<SectionBounds>,
    },
}
