use std::str::FromStr;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        feedback::entities::{FeedbackRecord, FeedbackType},
    },
    entity::feedbacks,
};

impl TryFrom<feedbacks::Model> for FeedbackRecord {
    type Error = CoreError;

    fn try_from(model: feedbacks::Model) -> Result<Self, Self::Error> {
        let feedback_type = FeedbackType::from_str(&model.feedback_type).map_err(|e| {
            tracing::error!("Corrupt feedback_type column: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            feedback: model.feedback,
            feedback_type,
            feedback_date: model.feedback_date.to_utc(),
            created_at: model.created_at.to_utc(),
        })
    }
}
