use crate::analysis::Analysis;
use crate::cli::{OutputFormat, SeqManip};
use crate::error::SeqError;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use std::process::ExitCode;
mod analysis;
mod cli;
mod codon;
mod error;
mod transcription;
mod translation;
mod utils;
#[cfg(feature = "validation")]
mod validation;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = match SeqManip::try_parse() {
        Ok(args) => args,
        // Usage errors exit with 1, leaving 2 to translation mismatches.
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{err}");
                    ExitCode::SUCCESS
                }
                _ => {
                    eprint!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            match err.downcast_ref::<SeqError>() {
                Some(SeqError::TranslationMismatch { .. }) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(args: &SeqManip) -> Result<()> {
    let analysis = Analysis::run(args)?;
    match args.format {
        OutputFormat::Text => print!("{}", analysis.to_text(args.width)),
        OutputFormat::Json => println!("{}", analysis.to_json()?),
    }
    Ok(())
}
