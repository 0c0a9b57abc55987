//! Application configuration.
//!
//! Settings are read from environment variables with hard defaults, so a
//! bare deployment starts with the placeholder DSN unchanged. A `.env`
//! file, when present, is applied by the service entry point before this
//! loader runs.

use crate::models::connection::ConnectionSettings;

/// Default bind host for the HTTP server.
const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port; each service applies its own override from `SERVER_PORT`.
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration shared across the service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name, for logs and response metadata.
    pub service_name: String,
    /// HTTP bind host (`SERVER_HOST`).
    pub host: String,
    /// HTTP bind port (`SERVER_PORT`).
    pub port: u16,
    /// Settings for the probed database (`DB_*` variables).
    pub database: ConnectionSettings,
}

impl AppConfig {
    /// Loads configuration from the process environment for the named service.
    pub fn load_with_service(service_name: &str) -> Self {
        Self::load_from(service_name, |key| std::env::var(key).ok())
    }

    /// Loads configuration through the given variable lookup.
    fn load_from(service_name: &str, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ConnectionSettings::default();
        let database = ConnectionSettings {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(lookup("DB_PORT"), defaults.port),
            database: lookup("DB_NAME").unwrap_or(defaults.database),
            charset: lookup("DB_CHARSET").unwrap_or(defaults.charset),
            username: lookup("DB_USER").unwrap_or(defaults.username),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
        };

        Self {
            service_name: service_name.to_string(),
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(lookup("SERVER_PORT"), DEFAULT_PORT),
            database,
        }
    }
}

/// Parses an optional variable, falling back on missing or malformed values.
fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
