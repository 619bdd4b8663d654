mod args;
mod case;
mod mover;
mod prompt;
mod reader;
mod rewriter;

use anyhow::{Result, Context};
use atty::Stream;
use std::io;
use std::process;

/// Main entry point of the application
/// Handles argument parsing and executes the program with error handling
fn main() {
    // Usage errors exit before any prompt is shown
    let args = match args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    init_logger(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging; RUST_LOG overrides the default level
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Runs the whole conversion: prompt, read, rewrite, then optionally move
///
/// # Arguments
/// * `args` - Parsed command line arguments
fn run(args: &args::Args) -> Result<()> {
    let interactive = atty::is(Stream::Stdin);
    if !interactive {
        log::debug!("Standard input is not a terminal; echoing answers");
    }

    let stdin = io::stdin();
    let mut prompter = prompt::Prompter::new(stdin.lock(), io::stdout()).with_echo(!interactive);
    let config = prompter.collect()?;
    log::debug!("Case mode {:?}, move requested: {}", config.case_mode, config.move_requested());

    let lines = reader::read_lines(&args.file)?;

    let summary = rewriter::rewrite_file(&args.file, &lines, &config.case_mode)?;
    if args.verbose {
        println!(
            "Modified: {:?} ({} of {} lines changed)",
            args.file, summary.changed, summary.lines
        );
    }

    if let Some(relocation) = &config.relocation {
        let moved = mover::move_file(&args.file, relocation).context("Failed to move file")?;
        if args.verbose {
            println!("Moved: {:?} -> {:?}", relocation.source_dir.join(&args.file), moved);
        }
    }

    println!("Process completed.");

    Ok(())
}
