//! Source selection for the primary video.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const MP4_MIME: &str = "video/mp4; codecs=\"avc1.42E01E\"";
pub const WEBM_MIME: &str = "video/webm; codecs=\"vp9\"";

/// Encoded-source URLs read from the primary video's data attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaCandidates {
    #[serde(default)]
    pub mp4: Option<String>,
    #[serde(default)]
    pub webm: Option<String>,
}

/// A `<source>` element to attach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MediaSource {
    pub url: String,
    pub mime: String,
}

impl MediaCandidates {
    /// Sources in preference order: MP4 first for compatibility, then WebM.
    /// Blank attributes are skipped.
    pub fn ordered_sources(&self) -> Vec<MediaSource> {
        [(&self.mp4, MP4_MIME), (&self.webm, WEBM_MIME)]
            .into_iter()
            .filter_map(|(url, mime)| {
                url.as_deref()
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(|url| MediaSource {
                        url: url.to_string(),
                        mime: mime.to_string(),
                    })
            })
            .collect()
    }
}
