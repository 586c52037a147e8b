use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL. The file is created when missing.
    /// TOML: `database.url`. Default: `sqlite://items.db`.
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Seconds a connection waits on a locked database before failing.
    /// TOML: `database.busy_timeout_secs`. Default: `5`.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Run the write+read pairs of update/delete inside one transaction.
    /// TOML: `database.transactional_mutations`. Default: `false`.
    #[serde(default)]
    pub transactional_mutations: bool,
}

impl DatabaseConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            busy_timeout_secs: default_busy_timeout_secs(),
            transactional_mutations: false,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://items.db".to_string()
}

fn default_busy_timeout_secs() -> u64 {
    5
}
