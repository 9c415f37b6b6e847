use axum::extract::State;
use nutrimate_core::domain::nutrition::{
    ports::NutritionService, value_objects::StartChatInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        nutrition::validators::ChatRequest,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
    identity::CallerIdentity,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
}

#[utoipa::path(
    post,
    path = "/nutrition_chat",
    tag = "nutrition",
    summary = "Start a nutrition chat",
    description = "Generates a nutrition chat reply for the caller's question",
    params(
        ("X-USER-ID" = Option<i32>, Header, description = "Numeric user id; absent callers act as default_user"),
    ),
    request_body = ChatRequest,
    responses(
        (status = 200, body = ChatResponse),
        (status = 400, description = "Bad request")
    )
)]
pub async fn start_chat(
    State(state): State<AppState>,
    CallerIdentity(user): CallerIdentity,
    ValidateJson(request): ValidateJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let answer = state
        .service
        .start_chat(
            user,
            StartChatInput {
                user_input: request.user_input,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatResponse { answer }))
}
