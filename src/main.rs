//! Headless replay of the scroll-scrub controller.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load configuration from `conf/config.toml` (or `--config`).
//! - Replay the script's events against a simulated page.
//! - Print the resulting page report as JSON.

mod page;
mod script;

use crate::page::SimulatedPage;
use crate::script::load_script;
use anyhow::{Context, Result, anyhow};
use scrub_core::config::load_config;
use std::env;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

struct Args {
    script: PathBuf,
    config: PathBuf,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config = load_config(&args.config);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        script = %args.script.display(),
        level = %config.log_level,
        fps = config.fps,
        scroll_range = config.scroll_range,
        "Starting replay"
    );

    let script = load_script(&args.script)?;
    let mut page = SimulatedPage::new(config, &script.page);
    for event in &script.events {
        for _ in 0..event.repeat {
            page.play(&event.kind);
        }
    }

    let report = page.report();
    info!(
        lock = ?report.controller.lock,
        offset = report.controller.offset,
        scroll_y = report.scroll_y,
        "Replay finished"
    );
    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut script = None;
    let mut config = PathBuf::from(DEFAULT_CONFIG_PATH);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| anyhow!("--config needs a path"))?;
            config = PathBuf::from(path);
        } else if script.is_none() {
            script = Some(PathBuf::from(arg));
        } else {
            return Err(anyhow!("Unexpected argument: {arg}"));
        }
    }

    let script =
        script.ok_or_else(|| anyhow!("Usage: vinyl-scrub <script.toml> [--config <path>]"))?;
    if !script.exists() {
        return Err(anyhow!("File not found: {}", script.display()));
    }
    Ok(Args { script, config })
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn missing_script_is_usage_error() {
        let err = parse_args(args(&[])).err().unwrap();
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn config_flag_needs_value() {
        let err = parse_args(args(&["--config"])).err().unwrap();
        assert!(err.to_string().contains("--config"));
    }

    #[test]
    fn nonexistent_script_is_reported() {
        let err = parse_args(args(&["/tmp/vinyl-scrub-no-such-script.toml"]))
            .err()
            .unwrap();
        assert!(err.to_string().contains("File not found"));
    }
}
