//! # pprof-replacer - Main Entry Point
//!
//! Parses arguments, sets up logging, runs one replacement and maps failures
//! to exit codes.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::Path;

use pprof_replacer::cli::Args;
use pprof_replacer::domain::ReplacerError;
use pprof_replacer::replace_symbol;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_SOFTWARE: i32 = 70;

fn main() {
    let args = Args::parse();
    init_logger(args.quiet);

    std::process::exit(match run(&args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e}");
            code
        }
    });
}

fn init_logger(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ReplacerError>() {
        Some(e) if e.is_usage() => EXIT_USAGE,
        Some(e) if e.is_internal() => EXIT_SOFTWARE,
        _ => EXIT_ERROR,
    }
}

fn run(args: &Args) -> Result<()> {
    let target = args.target()?;
    let replacement = args.replacement();

    // Output always lands in the working directory
    let summary = replace_symbol(target, &replacement, Path::new("."))?;

    if summary.replaced == 0 {
        info!("no string table entry matched {:?}", replacement.from);
    }
    info!(
        "wrote {} ({} entries replaced, {} -> {} bytes, input was {})",
        summary.output.display(),
        summary.replaced,
        summary.input_bytes,
        summary.output_bytes,
        summary.format
    );
    Ok(())
}
