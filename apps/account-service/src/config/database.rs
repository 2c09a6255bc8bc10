//! PostgreSQL connection configuration.

use serde::{Deserialize, Serialize};

/// Accepted values for [`DatabaseConfig::sslmode`].
pub const SSL_MODES: [&str; 6] = [
    "disable",
    "allow",
    "prefer",
    "require",
    "verify-ca",
    "verify-full",
];

/// Database connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Role name.
    #[serde(default = "default_user")]
    pub user: String,
    /// Role password.
    #[serde(default)]
    pub password: String,
    /// Server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database name.
    #[serde(default = "default_name")]
    pub name: String,
    /// libpq-style SSL mode.
    #[serde(default = "default_sslmode")]
    pub sslmode: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            password: String::new(),
            host: default_host(),
            port: default_port(),
            name: default_name(),
            sslmode: default_sslmode(),
        }
    }
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

const fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    "simple_bank".to_string()
}

fn default_sslmode() -> String {
    "disable".to_string()
}
