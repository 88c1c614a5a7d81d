use std::{env, error::Error, path::PathBuf};

use crate::{resolver::ResolveMode, Deporder};

const DEFAULT_MANIFEST_FILE_NAME: &str = "dependencies.json";

#[derive(Default)]
pub struct DeporderBuilder {
    manifest: Option<PathBuf>,
    resolve_mode: Option<ResolveMode>,
}

impl DeporderBuilder {
    /// Path to the dependency manifest file.
    ///
    /// Defaults to `dependencies.json` in the current directory.
    pub fn manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    /// How to treat dependencies that have no manifest entry of their own.
    ///
    /// Defaults to [`ResolveMode::Strict`].
    pub fn resolve_mode(mut self, resolve_mode: ResolveMode) -> Self {
        self.resolve_mode = Some(resolve_mode);
        self
    }

    pub fn try_build(self) -> Result<Deporder, Box<dyn Error>> {
        let Self {
            manifest,
            resolve_mode,
        } = self;

        let manifest = match manifest {
            Some(manifest) => manifest,
            None => env::current_dir()?.join(DEFAULT_MANIFEST_FILE_NAME),
        };

        Ok(Deporder {
            manifest,
            resolve_mode: resolve_mode.unwrap_or_default(),
        })
    }
}
