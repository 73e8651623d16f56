// crates/cli/src/args.rs
use clap::{Parser, Subcommand, ValueHint};
use rename_media_engine::options::OutputFormat;
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "rename_media",
    version = crate::VERSION,
    about = "Rename image/video batches by their earliest known timestamp"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prefix every supported file with YYYYMMDD_HHMMSS_ and keep the rest
    Stamp(StampArgs),
    /// Move files into a destination folder as a zero-padded sequence
    Sequence(SequenceArgs),
}

#[derive(clap::Args, Debug)]
pub struct StampArgs {
    /// Directory containing the image/video files
    #[arg(value_hint = ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Extensions to process (comma separated; defaults to the supported
    /// image/video set)
    #[arg(long, value_delimiter = ',')]
    pub ext: Vec<String>,

    /// Compute and print the plan without renaming anything
    #[arg(long)]
    pub dry_run: bool,

    /// Abort on the first per-file error instead of collecting them
    #[arg(long)]
    pub strict: bool,

    /// Skip the EXIF/container probes and use filesystem times only
    #[arg(long)]
    pub no_metadata: bool,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct SequenceArgs {
    /// Directory whose files are moved away
    #[arg(value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Directory receiving the renumbered files
    #[arg(value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Extension given to the renumbered files
    #[arg(long, default_value = "jpg")]
    pub image_format: String,

    /// Compute and print the plan without moving anything
    #[arg(long)]
    pub dry_run: bool,
}
