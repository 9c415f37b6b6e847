use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{
        entities::{LogicalDb, Session},
        ports::SessionProvider,
    },
};

/// Session provider backed by one sea-orm pool per logical database.
///
/// Acquisitions are independent pool checkouts, so concurrent requests never
/// share a session.
#[derive(Debug, Clone)]
pub struct PostgresSessionManager {
    user: DatabaseConnection,
    health: DatabaseConnection,
}

impl PostgresSessionManager {
    pub fn new(user: DatabaseConnection, health: DatabaseConnection) -> Self {
        Self { user, health }
    }

    pub fn connection(&self, db: LogicalDb) -> &DatabaseConnection {
        match db {
            LogicalDb::User => &self.user,
            LogicalDb::Health => &self.health,
        }
    }

    /// Applies the embedded migrations of each logical database.
    pub async fn migrate(&self) -> Result<(), anyhow::Error> {
        sqlx::migrate!("./migrations/user")
            .run(self.user.get_postgres_connection_pool())
            .await?;
        sqlx::migrate!("./migrations/health")
            .run(self.health.get_postgres_connection_pool())
            .await?;
        Ok(())
    }
}

impl SessionProvider for PostgresSessionManager {
    async fn session(&self, db: LogicalDb) -> Result<Session, CoreError> {
        let conn = self.connection(db).clone();

        conn.ping().await.map_err(|e| {
            error!("Failed to acquire {} database session: {}", db, e);
            CoreError::SessionUnavailable(e.to_string())
        })?;

        Ok(Session::new(db, conn))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn manager() -> PostgresSessionManager {
        PostgresSessionManager::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        )
    }

    #[tokio::test]
    async fn sessions_are_tagged_with_their_logical_database() {
        let manager = manager();

        for db in [LogicalDb::User, LogicalDb::Health] {
            let session = manager.session(db).await.unwrap();
            assert_eq!(session.database(), db);
        }
    }
}
