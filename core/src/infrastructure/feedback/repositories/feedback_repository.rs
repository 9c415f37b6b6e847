use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        feedback::{entities::FeedbackRecord, ports::FeedbackRepository},
    },
    entity::feedbacks::{ActiveModel, Entity},
};

/// Feedback repository over the `user` database.
#[derive(Debug, Clone)]
pub struct PostgresFeedbackRepository {
    pub db: DatabaseConnection,
}

impl PostgresFeedbackRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl FeedbackRepository for PostgresFeedbackRepository {
    async fn insert(&self, record: FeedbackRecord) -> Result<FeedbackRecord, CoreError> {
        let active_model = ActiveModel {
            id: Set(record.id),
            user_id: Set(record.user_id),
            feedback: Set(record.feedback.clone()),
            feedback_type: Set(record.feedback_type.as_str().to_string()),
            feedback_date: Set(record.feedback_date.fixed_offset()),
            created_at: Set(record.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to insert feedback record: {}", e);
                CoreError::InternalServerError
            })?;

        FeedbackRecord::try_from(created)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::{domain::feedback::entities::FeedbackType, entity::feedbacks};

    #[tokio::test]
    async fn insert_maps_the_returned_row_back_to_the_domain() {
        let record = FeedbackRecord::new(
            3,
            "Less sugar at breakfast.".to_string(),
            FeedbackType::Nutrition,
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        );

        let row = feedbacks::Model {
            id: record.id,
            user_id: record.user_id,
            feedback: record.feedback.clone(),
            feedback_type: record.feedback_type.as_str().to_string(),
            feedback_date: record.feedback_date.fixed_offset(),
            created_at: record.created_at.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let repository = PostgresFeedbackRepository::new(db);
        let created = repository.insert(record.clone()).await.unwrap();

        assert_eq!(created, record);
    }

    #[tokio::test]
    async fn corrupt_feedback_type_maps_to_an_internal_error() {
        let record = FeedbackRecord::new(
            3,
            "x".to_string(),
            FeedbackType::Nutrition,
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
        );

        let row = feedbacks::Model {
            id: record.id,
            user_id: record.user_id,
            feedback: record.feedback.clone(),
            feedback_type: "gibberish".to_string(),
            feedback_date: record.feedback_date.fixed_offset(),
            created_at: record.created_at.fixed_offset(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let repository = PostgresFeedbackRepository::new(db);
        let err = repository.insert(record).await.unwrap_err();

        assert_eq!(err, CoreError::InternalServerError);
    }
}
