use clap::Parser;
use rename_media_cli::args::{Args, Command};
use rename_media_cli::config::{Config, SequenceOptions};
use rename_media_cli::error::Result;
use rename_media_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Stamp(stamp) => {
            let config = Config::from(stamp);
            let result = rename_media_engine::run(&config)?;
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }
            presentation::print_results(&result, &config)?;
        }
        Command::Sequence(sequence) => {
            let options = SequenceOptions::from(sequence);
            let result = rename_media_engine::run_sequence(&options)?;
            presentation::print_sequence(&result, options.dry_run);
        }
    }
    Ok(())
}
