use serde::Deserialize;
use tracing::warn;

/// High-level scrub configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_fps")]
    pub fps: f64,
    #[serde(default = "crate::config::defaults::default_max_frame")]
    pub max_frame: u32,
    #[serde(default = "crate::config::defaults::default_scroll_range")]
    pub scroll_range: f64,
    #[serde(default = "crate::config::defaults::default_wheel_damping")]
    pub wheel_damping: f64,
    #[serde(default = "crate::config::defaults::default_ease_factor")]
    pub ease_factor: f64,
    #[serde(default = "crate::config::defaults::default_overlay_removal_delay_ms")]
    pub overlay_removal_delay_ms: u32,
    #[serde(default = "crate::config::defaults::default_video_section_selector")]
    pub video_section_selector: String,
    #[serde(default = "crate::config::defaults::default_overlay_id")]
    pub overlay_id: String,
    #[serde(default = "crate::config::defaults::default_prev_selector")]
    pub prev_selector: String,
    #[serde(default = "crate::config::defaults::default_next_selector")]
    pub next_selector: String,
    #[serde(default = "crate::config::defaults::default_frame_selector")]
    pub frame_selector: String,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            fps: crate::config::defaults::default_fps(),
            max_frame: crate::config::defaults::default_max_frame(),
            scroll_range: crate::config::defaults::default_scroll_range(),
            wheel_damping: crate::config::defaults::default_wheel_damping(),
            ease_factor: crate::config::defaults::default_ease_factor(),
            overlay_removal_delay_ms: crate::config::defaults::default_overlay_removal_delay_ms(),
            video_section_selector: crate::config::defaults::default_video_section_selector(),
            overlay_id: crate::config::defaults::default_overlay_id(),
            prev_selector: crate::config::defaults::default_prev_selector(),
            next_selector: crate::config::defaults::default_next_selector(),
            frame_selector: crate::config::defaults::default_frame_selector(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Replace values the mapping cannot work with by their defaults.
    pub fn sanitized(mut self) -> Self {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            warn!(fps = self.fps, "Ignoring non-positive fps");
            self.fps = crate::config::defaults::default_fps();
        }
        if !(self.scroll_range.is_finite() && self.scroll_range > 0.0) {
            warn!(
                scroll_range = self.scroll_range,
                "Ignoring non-positive scroll range"
            );
            self.scroll_range = crate::config::defaults::default_scroll_range();
        }
        if !(self.wheel_damping.is_finite() && self.wheel_damping > 0.0) {
            warn!(
                wheel_damping = self.wheel_damping,
                "Ignoring non-positive wheel damping"
            );
            self.wheel_damping = crate::config::defaults::default_wheel_damping();
        }
        if !(self.ease_factor.is_finite() && self.ease_factor > 0.0 && self.ease_factor <= 1.0) {
            warn!(
                ease_factor = self.ease_factor,
                "Ease factor must be in (0, 1]; using default"
            );
            self.ease_factor = crate::config::defaults::default_ease_factor();
        }
        self
    }

    /// Length of the clip in seconds (`max_frame / fps`).
    pub fn max_time(&self) -> f64 {
        f64::from(self.max_frame) / self.fps
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
