mod basic;
mod database;

pub use basic::BasicConfig;
pub use database::DatabaseConfig;

use crate::error::ItemstoreError;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Storage settings (see `database` table in config.toml).
    #[serde(default)]
    pub database: DatabaseConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "ITEMSTORE_";

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file and
    /// `ITEMSTORE_`-prefixed environment variables (`__` separates tables).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from defaults, `config.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ItemstoreError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ItemstoreError> {
        Ok(figment.extract()?)
    }
}
