use std::path::PathBuf;

use clap::Parser;

/// Computes the installation order of the packages described in a dependency
/// manifest.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    /// Path to the dependency manifest file (.json or .toml)
    pub manifest: PathBuf,
    /// Treat dependencies that have no manifest entry of their own as already
    /// installed instead of failing
    #[clap(short, long)]
    pub assume_installed: bool,
}
