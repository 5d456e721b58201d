use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// User-agent signals that opt the page out of the scrub effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserPreferences {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub save_data: bool,
}

impl UserPreferences {
    /// Media query checked for the motion preference.
    pub const REDUCED_MOTION_QUERY: &'static str = "(prefers-reduced-motion: reduce)";

    pub fn allows_scrub(&self) -> bool {
        !(self.reduced_motion || self.save_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn either_signal_disables_scrub() {
        assert!(UserPreferences::default().allows_scrub());
        assert!(
            !UserPreferences {
                reduced_motion: true,
                save_data: false
            }
            .allows_scrub()
        );
        assert!(
            !UserPreferences {
                reduced_motion: false,
                save_data: true
            }
            .allows_scrub()
        );
    }
}
