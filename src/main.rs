//! csvplot - plot CSV columns from the command line.

use anyhow::Result;
use clap::Parser;
use csvplot::cli::{split_tokens, Args};
use csvplot::render::{png, terminal};
use csvplot::util::SeededColors;
use csvplot::{logging, plot, PlotError};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let tokens = split_tokens(std::env::args());
    for token in &tokens.skipped {
        eprintln!("Warning: ignoring '{}', options take the form --key=value", token);
    }
    // Usage errors print clap's message and exit with status 2.
    let args = Args::parse_from(&tokens.kept);

    // Set up logging if --log option is provided
    let _guard = match &args.log {
        Some(path) => Some(logging::init(path, &args.log_level)?),
        None => None,
    };
    tracing::info!("Starting csvplot");
    for token in &tokens.skipped {
        tracing::warn!("skipped malformed token {:?}", token);
    }

    let config = args.into_config()?;
    let scene = plot::render(&config, &mut SeededColors::new(config.seed)).map_err(|e| {
        tracing::error!("plot failed: {}", e);
        e
    })?;

    if let Some(path) = &config.output {
        png::write(&scene, path)?;
    }

    if config.show {
        let title = format!("{} - {}", config.kind.name(), config.data.display());
        match terminal::show(&scene, &title) {
            Ok(()) => {}
            Err(PlotError::Terminal(reason)) => {
                tracing::warn!("terminal view skipped: {}", reason);
                eprintln!("Warning: terminal view skipped: {}", reason);
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!("csvplot exited");
    Ok(())
}
