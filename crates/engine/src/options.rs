use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Extensions treated as images (EXIF probe applies).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Extensions treated as videos (container probe applies).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "m4v"];

/// Kind of media file, decided by extension alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file extension. Matching is case-insensitive; anything
    /// outside the supported lists returns `None` and is left untouched.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lower = ext.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&lower.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&lower.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

/// Where the chosen timestamp came from, reported per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// Date fields lifted out of a legacy export name, no probing done.
    LegacyName,
    /// Embedded capture metadata (EXIF or container tag) won the minimum.
    Capture,
    /// Filesystem creation/modification time won the minimum.
    Filesystem,
}
