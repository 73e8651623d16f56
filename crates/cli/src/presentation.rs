// crates/cli/src/presentation.rs
use rename_media_engine::config::Config;
use rename_media_engine::options::{OutputFormat, TimestampSource};
use rename_media_engine::report::{RunResult, SequenceResult, SkipReason};

/// Print a run report in the configured format.
///
/// # Errors
/// Returns an error when the JSON report cannot be serialized; the caller
/// surfaces it on stderr rather than exiting quietly with an empty report.
pub fn print_results(result: &RunResult, config: &Config) -> crate::error::Result<()> {
    match config.format {
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Table => print_table(result, config),
    }
    Ok(())
}

fn print_table(result: &RunResult, config: &Config) {
    let mode = if config.dry_run { " (dry-run)" } else { "" };
    println!("rename_media v{}{mode}", crate::VERSION);
    println!();

    for record in &result.renamed {
        println!(
            "{} -> {}  [{}]",
            record.from.display(),
            record.to.display(),
            source_label(record.source)
        );
    }

    let canonical = result
        .skipped
        .iter()
        .filter(|(_, r)| *r == SkipReason::AlreadyCanonical)
        .count();
    let unsupported = result.skipped.len() - canonical;

    println!("---");
    println!(
        "{} renamed, {} already canonical, {} unsupported, {} errors",
        result.renamed.len(),
        canonical,
        unsupported,
        result.errors.len()
    );
}

fn print_json(result: &RunResult) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn source_label(source: TimestampSource) -> &'static str {
    match source {
        TimestampSource::LegacyName => "legacy name",
        TimestampSource::Capture => "capture time",
        TimestampSource::Filesystem => "fs time",
    }
}

pub fn print_sequence(result: &SequenceResult, dry_run: bool) {
    let mode = if dry_run { " (dry-run)" } else { "" };
    println!("rename_media v{}{mode}", crate::VERSION);
    println!();
    for (from, to) in &result.moved {
        println!("{} -> {}", from.display(), to.display());
    }
    println!("---");
    println!("{} moved", result.moved.len());
}
