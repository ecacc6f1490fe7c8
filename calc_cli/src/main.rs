//! # Keypad CLI Application
//!
//! Terminal front end for the calc_core engine: an interactive keypad built
//! with Ratatui, and an `eval` subcommand that presses a scripted sequence
//! of keys and prints the display (or the whole state as JSON).

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod tui;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();

    // The keypad owns the terminal, so it only logs to --log-file
    let console_logging = matches!(cli.command, Some(Commands::Eval(_)));
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref(), console_logging)?;

    info!("Keypad v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let settings = config::load_settings(cli.config.as_deref(), cli.angle_mode)?;
    debug!("Engine settings: {:?}", settings);

    match cli.command {
        Some(Commands::Eval(args)) => commands::eval::run(&args, settings),
        Some(Commands::Tui) | None => tui::run(settings),
    }
}
