use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use std::env;
use std::fmt;
use tracing::debug;

/// Fixed connection settings for the gym database.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse()
            .context("DB_PORT must be a valid port number")?;
        let database = env::var("DB_NAME").unwrap_or_else(|_| "gym_db".to_string());
        let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_default();

        Ok(DatabaseConfig {
            host,
            port,
            database,
            user,
            password,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Hands out one live database connection per request.
///
/// Implementations must not retry: a failed attempt is reported straight back
/// to the caller, which classifies it as the database being unavailable.
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    async fn acquire(&self) -> Result<PgConnection, sqlx::Error>;
}

/// Opens a fresh Postgres connection on every `acquire`.
#[derive(Clone)]
pub struct PgConnectionProvider {
    options: PgConnectOptions,
}

impl PgConnectionProvider {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self::with_options(config.connect_options())
    }

    pub fn with_options(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ConnectionProvider for PgConnectionProvider {
    async fn acquire(&self) -> Result<PgConnection, sqlx::Error> {
        let conn = PgConnection::connect_with(&self.options).await?;
        debug!("Connection to database successful");
        Ok(conn)
    }
}
