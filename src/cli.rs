//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// sfprofiles - split and recombine Salesforce profile metadata
#[derive(Parser, Debug)]
#[command(name = "sfprofiles")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split canonical profile documents into per-element fragment files
    Separate(commands::separate::SeparateArgs),

    /// Combine fragment files back into canonical profile documents
    Combine(commands::combine::CombineArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .format_timestamp(None)
            .format_target(false)
            .init();

        match self.command {
            Commands::Separate(args) => commands::separate::execute(args),
            Commands::Combine(args) => commands::combine::execute(args),
        }
    }
}
