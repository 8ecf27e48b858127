// privacy-brush/src/main.rs
//! privacy-brush entry point.
//!
//! Parses the command line, sets up logging and dispatches to the list or
//! mask command. Any error is printed to stderr and the process exits with
//! status 1.

use anyhow::Result;
use clap::Parser;
use log::info;

use privacy_brush::cli::Cli;
use privacy_brush::commands::{error_msg, list, mask};
use privacy_brush::logger;

async fn run(cli: Cli) -> Result<()> {
    if cli.list_patterns {
        let config = mask::resolve_config(&cli)?;
        return list::run_list_patterns(&config);
    }
    mask::run_mask_command(&cli).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::level_for(cli.verbose, cli.quiet));
    info!("privacy-brush started. Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        error_msg(format!("{e:#}"));
        std::process::exit(1);
    }
}
