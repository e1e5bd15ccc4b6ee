//! Separate command implementation
//!
//! Splits every canonical profile document in the profile directory into
//! per-element fragment files plus a per-profile scalar meta file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use sfprofiles::decompose;
use sfprofiles::defaults::DEFAULT_PROFILE_DIR;

/// Arguments for the separate command
#[derive(Args, Debug)]
pub struct SeparateArgs {
    /// Directory containing the canonical profile documents
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PROFILE_DIR)]
    pub output: PathBuf,
}

/// Execute the separate command
pub fn execute(args: SeparateArgs) -> Result<()> {
    decompose::decompose_directory(&args.output)?;
    Ok(())
}
