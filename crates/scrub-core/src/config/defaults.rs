pub(crate) fn default_fps() -> f64 {
    24.0
}

pub(crate) fn default_max_frame() -> u32 {
    360
}

pub(crate) fn default_scroll_range() -> f64 {
    3000.0
}

pub(crate) fn default_wheel_damping() -> f64 {
    0.6
}

pub(crate) fn default_ease_factor() -> f64 {
    0.3
}

pub(crate) fn default_overlay_removal_delay_ms() -> u32 {
    500
}

pub(crate) fn default_video_section_selector() -> String {
    "[data-kind=\"video\"]".to_string()
}

pub(crate) fn default_overlay_id() -> String {
    "loading".to_string()
}

pub(crate) fn default_prev_selector() -> String {
    "[data-prev]".to_string()
}

pub(crate) fn default_next_selector() -> String {
    "[data-next]".to_string()
}

pub(crate) fn default_frame_selector() -> String {
    "[data-frame]".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}
