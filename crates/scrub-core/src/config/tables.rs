use super::defaults;
use super::models::{AppConfig, LogLevel};
use serde::Deserialize;

/// On-disk layout: one table per concern, flattened into `AppConfig`.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    scrub: ScrubTable,
    #[serde(default)]
    overlay: OverlayTable,
    #[serde(default)]
    dom: DomTable,
    #[serde(default)]
    logging: LoggingTable,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            fps: tables.scrub.fps,
            max_frame: tables.scrub.max_frame,
            scroll_range: tables.scrub.scroll_range,
            wheel_damping: tables.scrub.wheel_damping,
            ease_factor: tables.scrub.ease_factor,
            overlay_removal_delay_ms: tables.overlay.removal_delay_ms,
            video_section_selector: tables.dom.video_section_selector,
            overlay_id: tables.dom.overlay_id,
            prev_selector: tables.dom.prev_selector,
            next_selector: tables.dom.next_selector,
            frame_selector: tables.dom.frame_selector,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            scrub: ScrubTable {
                fps: config.fps,
                max_frame: config.max_frame,
                scroll_range: config.scroll_range,
                wheel_damping: config.wheel_damping,
                ease_factor: config.ease_factor,
            },
            overlay: OverlayTable {
                removal_delay_ms: config.overlay_removal_delay_ms,
            },
            dom: DomTable {
                video_section_selector: config.video_section_selector.clone(),
                overlay_id: config.overlay_id.clone(),
                prev_selector: config.prev_selector.clone(),
                next_selector: config.next_selector.clone(),
                frame_selector: config.frame_selector.clone(),
            },
            logging: LoggingTable {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ScrubTable {
    #[serde(default = "defaults::default_fps")]
    fps: f64,
    #[serde(default = "defaults::default_max_frame")]
    max_frame: u32,
    #[serde(default = "defaults::default_scroll_range")]
    scroll_range: f64,
    #[serde(default = "defaults::default_wheel_damping")]
    wheel_damping: f64,
    #[serde(default = "defaults::default_ease_factor")]
    ease_factor: f64,
}

impl Default for ScrubTable {
    fn default() -> Self {
        ScrubTable {
            fps: defaults::default_fps(),
            max_frame: defaults::default_max_frame(),
            scroll_range: defaults::default_scroll_range(),
            wheel_damping: defaults::default_wheel_damping(),
            ease_factor: defaults::default_ease_factor(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct OverlayTable {
    #[serde(default = "defaults::default_overlay_removal_delay_ms")]
    removal_delay_ms: u32,
}

impl Default for OverlayTable {
    fn default() -> Self {
        OverlayTable {
            removal_delay_ms: defaults::default_overlay_removal_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct DomTable {
    #[serde(default = "defaults::default_video_section_selector")]
    video_section_selector: String,
    #[serde(default = "defaults::default_overlay_id")]
    overlay_id: String,
    #[serde(default = "defaults::default_prev_selector")]
    prev_selector: String,
    #[serde(default = "defaults::default_next_selector")]
    next_selector: String,
    #[serde(default = "defaults::default_frame_selector")]
    frame_selector: String,
}

impl Default for DomTable {
    fn default() -> Self {
        DomTable {
            video_section_selector: defaults::default_video_section_selector(),
            overlay_id: defaults::default_overlay_id(),
            prev_selector: defaults::default_prev_selector(),
            next_selector: defaults::default_next_selector(),
            frame_selector: defaults::default_frame_selector(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingTable {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingTable {
    fn default() -> Self {
        LoggingTable {
            log_level: defaults::default_log_level(),
        }
    }
}
