use std::error::Error;

use clap::Parser;
use deporder::{cli::args::CliArgs, config::DeporderConfig, resolver::ResolveMode, Deporder};

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse();
    let config = DeporderConfig::load()?;

    // The command line flag wins over the environment.
    let resolve_mode = if cli_args.assume_installed {
        ResolveMode::AssumeInstalled
    } else {
        config.resolve_mode.unwrap_or_default()
    };

    let deporder = Deporder::builder()
        .manifest(cli_args.manifest)
        .resolve_mode(resolve_mode)
        .try_build()?;

    let order = deporder.install_order()?;

    println!("{order}");

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
