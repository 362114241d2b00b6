use serde::{Deserialize, Serialize};

/// SQLite storage configuration (see `storage` table in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Database URL for SQLite. The file is created when missing.
    /// TOML: `storage.database_url`. Default: `sqlite://database.db`.
    ///
    /// `sqlite::memory:` only works with `max_connections = 1`; every pooled
    /// connection would otherwise see its own empty database.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Upper bound on pooled connections. Each request holds at most one.
    /// TOML: `storage.max_connections`. Default: `5`.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a writer waits on a locked database before failing.
    /// TOML: `storage.busy_timeout_secs`. Default: `5`.
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,

    /// Log every executed SQL statement at debug level.
    /// TOML: `storage.log_statements`. Default: `false`.
    #[serde(default)]
    pub log_statements: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            max_connections: default_max_connections(),
            busy_timeout_secs: default_busy_timeout_secs(),
            log_statements: false,
        }
    }
}

fn default_database_url() -> String {
    "sqlite://database.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_busy_timeout_secs() -> u64 {
    5
}
