//! Database connection settings.
//!
//! The full DSN surface of the service: host, port, database name,
//! character set and credentials. Values are fixed at startup and shared
//! immutably for the lifetime of the process.

use serde::Serialize;
use validator::Validate;

/// MySQL default port, used when `DB_PORT` is not set.
pub const DEFAULT_MYSQL_PORT: u16 = 3306;

/// Connection settings for the single configured database.
///
/// The defaults reproduce the placeholder DSN the service ships with;
/// deployments override individual fields through the environment.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ConnectionSettings {
    /// Database host.
    #[validate(length(min = 1, message = "Database host must not be empty"))]
    pub host: String,
    /// Database port.
    #[validate(range(min = 1, message = "Database port must be non-zero"))]
    pub port: u16,
    /// Database name.
    #[validate(length(min = 1, max = 64, message = "Database name must be 1-64 characters"))]
    pub database: String,
    /// Connection character set.
    #[validate(length(min = 1, message = "Character set must not be empty"))]
    pub charset: String,
    /// Database username.
    #[validate(length(min = 1, message = "Database username must not be empty"))]
    pub username: String,
    /// Database password (not serialized; empty passwords are allowed).
    #[serde(skip_serializing)]
    pub password: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_MYSQL_PORT,
            database: "CHANGE_ME_DB".to_string(),
            charset: "utf8mb4".to_string(),
            username: "CHANGE_ME_USER".to_string(),
            password: "CHANGE_ME_PASS".to_string(),
        }
    }
}

impl ConnectionSettings {
    /// DSN-style display form without credentials, safe for logs and
    /// health output.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:{}/{}?charset={}",
            self.host, self.port, self.database, self.charset
        )
    }
}
