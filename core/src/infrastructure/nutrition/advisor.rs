use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use tracing::error;

use crate::{
    domain::{
        common::entities::{app_errors::CoreError, identity::UserIdentity},
        nutrition::{
            entities::FoodNutrition,
            ports::{LLMClient, NutritionAdvisor},
            schema::{chat_response_schema, daily_feedback_schema},
        },
        session::entities::Session,
    },
    entity::foods,
};

const CHAT_PROMPT: &str =
    "You are a nutrition coach. Answer the user's question in plain language, briefly and concretely.";

const FEEDBACK_PROMPT: &str =
    "You are a nutrition coach. Write a short feedback message about the user's nutrition for the given day.";

/// Orchestration adapter: chat and feedback text come from the LLM, food
/// facts come from the `foods` table of the health database.
#[derive(Debug, Clone)]
pub struct GeminiNutritionAdvisor<L> {
    llm: L,
}

impl<L> GeminiNutritionAdvisor<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }
}

impl<L: LLMClient> NutritionAdvisor for GeminiNutritionAdvisor<L> {
    async fn chat_response(
        &self,
        session: Session,
        user: UserIdentity,
        user_input: String,
    ) -> Result<String, CoreError> {
        tracing::debug!(
            database = session.database().as_str(),
            user = %user,
            "generating nutrition chat response"
        );

        let prompt = format!("{CHAT_PROMPT}\n\nUser ({user}): {user_input}");
        let raw = self
            .llm
            .generate_with_text(prompt, chat_response_schema())
            .await?;

        extract_text_field(&raw, "answer")
    }

    async fn daily_feedback(
        &self,
        user_session: Session,
        health_session: Session,
        user_id: i32,
        feedback_date: NaiveDate,
    ) -> Result<String, CoreError> {
        tracing::debug!(
            user_database = user_session.database().as_str(),
            health_database = health_session.database().as_str(),
            user_id,
            %feedback_date,
            "generating nutrition feedback"
        );

        let prompt = format!("{FEEDBACK_PROMPT}\n\nUser id: {user_id}\nDate: {feedback_date}");
        let raw = self
            .llm
            .generate_with_text(prompt, daily_feedback_schema())
            .await?;

        extract_text_field(&raw, "feedback")
    }

    async fn food_nutrition(
        &self,
        session: Session,
        food_name: String,
    ) -> Result<FoodNutrition, CoreError> {
        let model = foods::Entity::find()
            .filter(foods::Column::FoodName.eq(food_name.clone()))
            .one(session.connection())
            .await
            .map_err(|e| {
                error!("Failed to look up food {}: {}", food_name, e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        Ok(FoodNutrition::from(model))
    }
}

fn extract_text_field(raw: &str, field: &str) -> Result<String, CoreError> {
    let parsed: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        error!("Failed to parse LLM response: {}", e);
        CoreError::ExternalServiceError(format!("Failed to parse LLM response: {e}"))
    })?;

    parsed
        .get(field)
        .and_then(|value| value.as_str())
        .map(|text| text.to_string())
        .ok_or_else(|| {
            CoreError::ExternalServiceError(format!("No {field} field in LLM response"))
        })
}

#[cfg(test)]
mod tests {
    use std::future::ready;

    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::domain::{
        nutrition::ports::MockLLMClient,
        session::entities::LogicalDb,
    };

    fn mock_session(db: LogicalDb) -> Session {
        Session::new(
            db,
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        )
    }

    #[tokio::test]
    async fn chat_response_unwraps_the_answer_field() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(r#"{"answer":"Eat more fiber."}"#.to_string()))));

        let advisor = GeminiNutritionAdvisor::new(llm);
        let answer = advisor
            .chat_response(
                mock_session(LogicalDb::User),
                UserIdentity::Anonymous,
                "What should I eat?".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(answer, "Eat more fiber.");
    }

    #[tokio::test]
    async fn malformed_llm_output_maps_to_an_external_service_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok("not json at all".to_string()))));

        let advisor = GeminiNutritionAdvisor::new(llm);
        let err = advisor
            .chat_response(
                mock_session(LogicalDb::User),
                UserIdentity::Known(1),
                "hi".to_string(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn missing_feedback_field_maps_to_an_external_service_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(ready(Ok(r#"{"answer":"wrong shape"}"#.to_string()))));

        let advisor = GeminiNutritionAdvisor::new(llm);
        let err = advisor
            .daily_feedback(
                mock_session(LogicalDb::User),
                mock_session(LogicalDb::Health),
                1,
                chrono::NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn food_lookup_maps_the_catalog_row() {
        let row = foods::Model {
            food_id: 5,
            food_name: "banana".to_string(),
            calorie: 89,
            carbohydrate: Some(22.8),
            protein: Some(1.1),
            fat: Some(0.3),
            sugar: Some(12.2),
            sodium: Some(1.0),
            base_amount: Some("100g".to_string()),
        };

        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row.clone()]])
            .into_connection();

        let advisor = GeminiNutritionAdvisor::new(MockLLMClient::new());
        let facts = advisor
            .food_nutrition(Session::new(LogicalDb::Health, conn), "banana".to_string())
            .await
            .unwrap();

        assert_eq!(facts, FoodNutrition::from(row));
    }

    #[tokio::test]
    async fn unknown_food_is_not_found() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<foods::Model>::new()])
            .into_connection();

        let advisor = GeminiNutritionAdvisor::new(MockLLMClient::new());
        let err = advisor
            .food_nutrition(Session::new(LogicalDb::Health, conn), "plutonium".to_string())
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound);
    }
}
