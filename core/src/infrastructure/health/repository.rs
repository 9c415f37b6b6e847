use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
    session::entities::LogicalDb,
};

/// Pings every logical database with its own pooled connection.
#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    user: DatabaseConnection,
    health: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(user: DatabaseConnection, health: DatabaseConnection) -> Self {
        Self { user, health }
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readiness(&self) -> Result<Vec<DatabaseHealthStatus>, CoreError> {
        let mut statuses = Vec::with_capacity(2);

        for (db, conn) in [
            (LogicalDb::User, &self.user),
            (LogicalDb::Health, &self.health),
        ] {
            let started = Instant::now();
            let status = match conn.ping().await {
                Ok(()) => DatabaseHealthStatus::healthy(
                    db.as_str(),
                    started.elapsed().as_millis() as u64,
                ),
                Err(e) => {
                    warn!("Readiness ping for {} database failed: {}", db, e);
                    DatabaseHealthStatus::unhealthy(
                        db.as_str(),
                        started.elapsed().as_millis() as u64,
                    )
                }
            };
            statuses.push(status);
        }

        Ok(statuses)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    #[tokio::test]
    async fn readiness_reports_both_logical_databases() {
        let repository = PostgresHealthCheckRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );

        let statuses = repository.readiness().await.unwrap();

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].database, "user");
        assert_eq!(statuses[1].database, "health");
        assert!(statuses.iter().all(|s| s.healthy));
    }
}
