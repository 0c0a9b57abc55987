//! MySQL connectivity probing.
//!
//! The probe opens a single short-lived connection with the configured
//! settings and closes it again. No statements are executed; a completed
//! handshake is the success criterion.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection};

use common::errors::{AppError, AppResult};
use common::models::ConnectionSettings;

/// Single-shot database probe.
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Attempts one connection with the configured settings, returning
    /// the handshake latency.
    async fn check(&self) -> AppResult<Duration>;
}

/// Probe backed by a real MySQL handshake.
pub struct DatabaseConnector {
    settings: ConnectionSettings,
}

impl DatabaseConnector {
    /// Creates a connector for the given settings.
    pub fn new(settings: ConnectionSettings) -> Self {
        Self { settings }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.settings.host)
            .port(self.settings.port)
            .database(&self.settings.database)
            .charset(&self.settings.charset)
            .username(&self.settings.username)
            .password(&self.settings.password)
    }
}

#[async_trait]
impl ConnectivityProbe for DatabaseConnector {
    async fn check(&self) -> AppResult<Duration> {
        tracing::debug!(url = %self.settings.redacted_url(), "Probing database");

        let start = Instant::now();
        let conn = self
            .connect_options()
            .connect()
            .await
            .map_err(|e| {
                tracing::warn!(url = %self.settings.redacted_url(), error = %e, "Database probe failed");
                AppError::DatabaseConnection(e.to_string())
            })?;
        let latency = start.elapsed();

        // The probe result is already decided; a failed close is irrelevant
        let _ = conn.close().await;
        Ok(latency)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Probe that always reports a reachable database.
    pub struct AlwaysUp;

    #[async_trait]
    impl ConnectivityProbe for AlwaysUp {
        async fn check(&self) -> AppResult<Duration> {
            Ok(Duration::ZERO)
        }
    }

    /// Probe that always fails with the given driver message.
    pub struct AlwaysDown(pub String);

    #[async_trait]
    impl ConnectivityProbe for AlwaysDown {
        async fn check(&self) -> AppResult<Duration> {
            Err(AppError::DatabaseConnection(self.0.clone()))
        }
    }
}
