use std::{error::Error, path::PathBuf};

use crate::{
    cli::command_handlers::do_order,
    resolver::{InstallOrder, ResolveMode},
};

mod builder;

pub use builder::DeporderBuilder;

pub struct Deporder {
    manifest: PathBuf,
    resolve_mode: ResolveMode,
}

impl Deporder {
    pub fn builder() -> DeporderBuilder {
        DeporderBuilder::default()
    }

    /// Computes the order in which the packages of the manifest can be
    /// installed, dependencies first
    pub fn install_order(&self) -> Result<InstallOrder, Box<dyn Error>> {
        do_order(&self.manifest, self.resolve_mode)
    }
}
