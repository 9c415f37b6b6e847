use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::{app_errors::CoreError, identity::UserIdentity},
    feedback::entities::FeedbackRecord,
    nutrition::{
        entities::FoodNutrition,
        value_objects::{DailyFeedbackInput, FoodNutritionInput, StartChatInput},
    },
    session::entities::Session,
};

/// Orchestration collaborator producing chat replies, feedback text and
/// food facts. Each operation receives the session(s) the route acquired;
/// the internals behind this trait are not part of this crate's contract.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionAdvisor: Send + Sync {
    fn chat_response(
        &self,
        session: Session,
        user: UserIdentity,
        user_input: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn daily_feedback(
        &self,
        user_session: Session,
        health_session: Session,
        user_id: i32,
        feedback_date: NaiveDate,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn food_nutrition(
        &self,
        session: Session,
        food_name: String,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;
}

/// LLM client trait for structured text generation.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the request-scoped nutrition flows.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionService: Send + Sync {
    fn start_chat(
        &self,
        user: UserIdentity,
        input: StartChatInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn daily_feedback(
        &self,
        user: UserIdentity,
        input: DailyFeedbackInput,
    ) -> impl Future<Output = Result<FeedbackRecord, CoreError>> + Send;

    fn food_nutrition(
        &self,
        input: FoodNutritionInput,
    ) -> impl Future<Output = Result<FoodNutrition, CoreError>> + Send;
}
