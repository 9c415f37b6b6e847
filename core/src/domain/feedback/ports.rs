use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, feedback::entities::FeedbackRecord,
};

/// Repository trait for persisted feedback records.
///
/// There is deliberately no duplicate guard: repeated submissions for the
/// same user and date append further rows.
#[cfg_attr(test, mockall::automock)]
pub trait FeedbackRepository: Send + Sync {
    fn insert(
        &self,
        record: FeedbackRecord,
    ) -> impl Future<Output = Result<FeedbackRecord, CoreError>> + Send;
}
