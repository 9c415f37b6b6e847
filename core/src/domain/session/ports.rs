use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::{LogicalDb, Session},
};

/// Scoped acquisition of database sessions keyed by logical database name.
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider: Send + Sync {
    fn session(&self, db: LogicalDb) -> impl Future<Output = Result<Session, CoreError>> + Send;
}
