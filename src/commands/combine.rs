//! Combine command implementation
//!
//! Recombines fragment files into canonical profile documents, optionally
//! restricted to the profiles named in a package manifest. A manifest
//! that declares no profile entries means there is nothing to compile;
//! the command logs that and exits successfully.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use sfprofiles::compose;
use sfprofiles::defaults::DEFAULT_PROFILE_DIR;
use sfprofiles::manifest;

/// Arguments for the combine command
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Directory containing the decomposed profile fragments
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_PROFILE_DIR)]
    pub output: PathBuf,

    /// Package manifest restricting which profiles are combined
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,
}

/// Execute the combine command
pub fn execute(args: CombineArgs) -> Result<()> {
    let allowed = match &args.manifest {
        Some(path) => {
            let names = manifest::profile_names(path)?;
            if names.is_empty() {
                log::info!("no profiles were found in the package");
                log::info!("skipping profile compilation");
                return Ok(());
            }
            Some(names)
        }
        None => None,
    };

    compose::compose_directory(&args.output, allowed.as_ref())?;

    match &allowed {
        Some(names) => log::info!(
            "the profiles for {} have been compiled for deployment",
            names.iter().cloned().collect::<Vec<_>>().join(", ")
        ),
        None => log::info!("the profiles have been compiled for deployment"),
    }
    Ok(())
}
