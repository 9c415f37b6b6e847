use axum::extract::{Query, State};
use nutrimate_core::domain::nutrition::{
    ports::NutritionService, value_objects::DailyFeedbackInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        nutrition::validators::FeedbackParams,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
    identity::CallerIdentity,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FeedbackResponse {
    pub feedback: String,
}

#[utoipa::path(
    post,
    path = "/nutrition_feedback",
    tag = "nutrition",
    summary = "Generate and store daily nutrition feedback",
    description = "Generates feedback for the given date and stores it as a nutrition feedback record. Repeated calls for one date store one record each.",
    params(
        FeedbackParams,
        ("X-USER-ID" = i32, Header, description = "Numeric user id; required because the record is stored per user"),
    ),
    responses(
        (status = 200, body = FeedbackResponse),
        (status = 400, description = "Bad request")
    )
)]
pub async fn submit_feedback(
    State(state): State<AppState>,
    CallerIdentity(user): CallerIdentity,
    Query(params): Query<FeedbackParams>,
) -> Result<Response<FeedbackResponse>, ApiError> {
    let record = state
        .service
        .daily_feedback(
            user,
            DailyFeedbackInput {
                feedback_date: params.feedback_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FeedbackResponse {
        feedback: record.feedback,
    }))
}
