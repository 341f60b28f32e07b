use std::env;
use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    NotANumber { key: &'static str, value: String },

    #[error("DATABASE_URL is not a valid MySQL URL: {0}")]
    DatabaseUrl(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: String,
    pub database_url: Option<String>,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    pub db_connect_retries: u32,
    pub otel_service_name: String,
    pub otel_exporter_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset and empty keys
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let string = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            port: parse(&lookup, "PORT", 3001)?,
            environment: string("ENVIRONMENT", "development"),
            database_url: var("DATABASE_URL"),
            db_host: string("DB_HOST", "localhost"),
            db_port: parse(&lookup, "DB_PORT", 3306)?,
            db_user: string("DB_USER", "root"),
            db_password: lookup("DB_PASSWORD").unwrap_or_default(),
            db_name: string("DB_NAME", "dev-test"),
            db_max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout: Duration::from_secs(parse(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                5,
            )?),
            db_connect_retries: parse(&lookup, "DB_CONNECT_RETRIES", 5)?,
            otel_service_name: string("OTEL_SERVICE_NAME", "compliance-report-api"),
            otel_exporter_endpoint: string(
                "OTEL_EXPORTER_OTLP_ENDPOINT",
                "http://localhost:4317",
            ),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Connection options for the report store. `DATABASE_URL` wins over the
    /// individual `DB_*` settings when present.
    pub fn connect_options(&self) -> Result<MySqlConnectOptions, ConfigError> {
        if let Some(url) = &self.database_url {
            return Ok(MySqlConnectOptions::from_str(url)?);
        }

        Ok(MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name))
    }
}

fn parse<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::NotANumber { key, value }),
        None => Ok(default),
    }
}
