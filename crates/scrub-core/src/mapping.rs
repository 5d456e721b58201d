//! Virtual scroll offset to video time.
//!
//! The mapping is linear over `[0, scroll_range]`, smoothed with a fixed
//! per-tick ease and quantized to whole frames so seeks land on exact frame
//! boundaries.

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackMapping {
    fps: f64,
    max_time: f64,
    scroll_range: f64,
    wheel_damping: f64,
    ease_factor: f64,
}

impl PlaybackMapping {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            fps: config.fps,
            max_time: config.max_time(),
            scroll_range: config.scroll_range,
            wheel_damping: config.wheel_damping,
            ease_factor: config.ease_factor,
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn scroll_range(&self) -> f64 {
        self.scroll_range
    }

    /// Duration of one frame in seconds.
    pub fn frame_time(&self) -> f64 {
        1.0 / self.fps
    }

    /// Offset after a wheel delta. Wheel input is damped, never below zero.
    pub fn apply_wheel(&self, offset: f64, delta_y: f64) -> f64 {
        (offset + delta_y * self.wheel_damping).max(0.0)
    }

    /// Offset after a touch delta. Touch input is taken as-is.
    pub fn apply_touch(&self, offset: f64, delta_y: f64) -> f64 {
        (offset + delta_y).max(0.0)
    }

    pub fn progress(&self, offset: f64) -> f64 {
        (offset / self.scroll_range).clamp(0.0, 1.0)
    }

    pub fn target_time(&self, offset: f64) -> f64 {
        self.progress(offset) * self.max_time
    }

    /// One ease step of `current` toward `target`.
    pub fn ease_toward(&self, current: f64, target: f64) -> f64 {
        current + (target - current) * self.ease_factor
    }

    /// Nearest exact frame boundary, kept inside `[0, max_time]`.
    pub fn snap(&self, time: f64) -> f64 {
        let frame = (time * self.fps).round();
        (frame / self.fps).clamp(0.0, self.max_time)
    }

    /// A seek is only worth issuing when the element is more than half a
    /// frame away from the snapped time.
    pub fn needs_seek(&self, media_time: f64, snapped: f64) -> bool {
        (media_time - snapped).abs() > self.frame_time() / 2.0
    }

    pub fn reached_end(&self, offset: f64) -> bool {
        offset >= self.scroll_range
    }
}

impl Default for PlaybackMapping {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
