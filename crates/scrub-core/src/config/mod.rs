//! Configuration loading for the scrub controller.
//!
//! Mapping constants, DOM selectors and the log level are centralized here and
//! loaded from `conf/config.toml` if present. Any missing or invalid entries
//! fall back to defaults so the page keeps working.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{AppConfig, LogLevel};
