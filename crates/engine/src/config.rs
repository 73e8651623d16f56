use crate::options::{IMAGE_EXTENSIONS, OutputFormat, VIDEO_EXTENSIONS};
use derive_builder::Builder;
use std::path::PathBuf;

/// Configuration for a stamping pass over one directory.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Directory whose entries are renamed in place.
    pub root: PathBuf,

    /// Extensions to process (lower-case, no dot). Defaults to the
    /// supported image and video lists.
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,

    /// Compute and report the plan without renaming anything.
    #[builder(default)]
    pub dry_run: bool,

    /// Fail on the first per-file error instead of collecting them.
    #[builder(default)]
    pub strict: bool,

    /// Skip the EXIF/container probes and use filesystem times only.
    #[builder(default)]
    pub no_metadata: bool,

    #[builder(default)]
    pub format: OutputFormat,
}

fn default_extensions() -> Vec<String> {
    IMAGE_EXTENSIONS
        .iter()
        .chain(VIDEO_EXTENSIONS.iter())
        .map(ToString::to_string)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: default_extensions(),
            dry_run: false,
            strict: false,
            no_metadata: false,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Whether a (lower-cased) extension is in scope for this run.
    #[must_use]
    pub fn allows_extension(&self, ext: &str) -> bool {
        let lower = ext.to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == lower)
    }
}

/// Configuration for the sequence (renumbering) variant.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct SequenceOptions {
    pub source: PathBuf,
    pub dest: PathBuf,

    /// Extension given to the renumbered files.
    #[builder(default = "String::from(\"jpg\")")]
    pub image_format: String,

    #[builder(default)]
    pub dry_run: bool,
}
