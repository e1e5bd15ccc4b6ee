//! # sfprofiles CLI
//!
//! This is the binary entry point for the `sfprofiles` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging from the global `--log-level` flag.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The core transformation logic is defined in the `lib.rs` library
//! crate, ensuring that the binary is a thin wrapper around the reusable
//! library functionality.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
