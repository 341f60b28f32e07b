use opentelemetry::KeyValue;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};

use super::retry::{RetryConfig, retry_with_backoff};
use crate::config::{Config, ConfigError};
use crate::telemetry::DB_CONNECT_ATTEMPTS;

/// Connects to the report store, retrying with backoff.
///
/// When the store stays unreachable the pool is still returned, built lazily:
/// requests fail with a database error until the store comes back, at which
/// point the pool opens connections on demand again.
pub async fn create_pool(config: &Config) -> Result<MySqlPool, ConfigError> {
    let connect_options = config.connect_options()?;
    let pool_options = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout);

    let retry = RetryConfig::default().with_max_attempts(config.db_connect_retries);

    let connected = retry_with_backoff(&retry, "db.connect", |attempt| {
        DB_CONNECT_ATTEMPTS.add(1, &[KeyValue::new("db.connect.attempt", attempt as i64)]);
        pool_options.clone().connect_with(connect_options.clone())
    })
    .await;

    match connected {
        Ok(pool) => {
            tracing::info!(
                max_connections = config.db_max_connections,
                "Database connection pool created"
            );
            Ok(pool)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                host = %connect_options.get_host(),
                "Report store unavailable, continuing with a lazily connecting pool"
            );
            Ok(pool_options.connect_lazy_with(connect_options))
        }
    }
}
