use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::resolver::ResolveMode;

pub struct DeporderConfig {
    pub resolve_mode: Option<ResolveMode>,
}

impl DeporderConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            resolve_mode: raw_config.resolve.mode,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    resolve: ResolveConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct ResolveConfig {
    mode: Option<ResolveMode>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("DEPORDER")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}
