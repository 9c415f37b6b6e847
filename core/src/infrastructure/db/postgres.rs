use sea_orm::{Database, DatabaseConnection};

pub struct PostgresConfig {
    pub database_url: String,
}

/// Connection pool wrapper for one Postgres database.
#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, anyhow::Error> {
        let db = Database::connect(&config.database_url).await?;
        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
