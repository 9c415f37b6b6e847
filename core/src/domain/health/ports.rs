use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus,
};

/// Probes the liveness of every logical database.
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<Vec<DatabaseHealthStatus>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<Vec<DatabaseHealthStatus>, CoreError>> + Send;
}
