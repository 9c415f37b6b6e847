pub mod postgres;
pub mod sessions;

pub use postgres::{Postgres, PostgresConfig};
pub use sessions::PostgresSessionManager;
