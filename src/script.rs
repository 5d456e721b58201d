//! Replay scripts: a page description plus a list of input events.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub page: PageSpec,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Static shape of the simulated page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub save_data: bool,
    /// The `[data-kind="video"]` section. It is pinned even without a video.
    #[serde(default = "default_true")]
    pub has_video_section: bool,
    /// A `<video>` inside that section.
    #[serde(default = "default_true")]
    pub has_video: bool,
    #[serde(default)]
    pub mp4: Option<String>,
    #[serde(default)]
    pub webm: Option<String>,
    #[serde(default = "default_true")]
    pub has_overlay: bool,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    #[serde(default = "default_section_heights")]
    pub section_heights: Vec<f64>,
}

impl Default for PageSpec {
    fn default() -> Self {
        PageSpec {
            reduced_motion: false,
            save_data: false,
            has_video_section: true,
            has_video: true,
            mp4: None,
            webm: None,
            has_overlay: true,
            viewport_height: default_viewport_height(),
            section_heights: default_section_heights(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptEvent {
    #[serde(flatten)]
    pub kind: EventKind,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EventKind {
    MediaReady {
        #[serde(default = "default_duration")]
        duration: f64,
        #[serde(default = "default_ready_state")]
        ready_state: u16,
    },
    MediaError {
        #[serde(default)]
        detail: String,
    },
    Wheel {
        delta_y: f64,
    },
    TouchStart {
        client_y: f64,
    },
    TouchMove {
        client_y: f64,
    },
    /// One display frame.
    Frame,
    /// Advance the page clock.
    Wait {
        ms: u64,
    },
    Prev,
    Next,
}

fn default_true() -> bool {
    true
}

fn default_viewport_height() -> f64 {
    900.0
}

fn default_section_heights() -> Vec<f64> {
    vec![900.0; 4]
}

fn default_repeat() -> u32 {
    1
}

fn default_duration() -> f64 {
    15.0
}

fn default_ready_state() -> u16 {
    4
}

pub fn parse_script(contents: &str) -> Result<ReplayScript> {
    toml::from_str(contents).context("replay script is not valid TOML")
}

pub fn load_script(path: &Path) -> Result<ReplayScript> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read replay script {}", path.display()))?;
    parse_script(&contents).with_context(|| format!("In {}", path.display()))
}
