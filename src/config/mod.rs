pub mod app;
pub mod database;

pub use app::AppConfig;
pub use database::{ConnectionProvider, DatabaseConfig, PgConnectionProvider};
