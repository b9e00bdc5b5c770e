//! azrmctl (azid) - resource ID tool for the azrm provider
//!
//! Parses resource IDs pasted from the portal or state files, and builds the
//! canonical IDs that `import` commands expect.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
