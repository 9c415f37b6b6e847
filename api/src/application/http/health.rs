use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use nutrimate_core::domain::health::{
    entities::DatabaseHealthStatus, ports::HealthCheckService,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::server::{api_entities::api_error::ApiError, app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(liveness, readiness))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub databases: Vec<DatabaseHealthStatus>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    )
)]
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Pings every logical database; 503 when any of them is unreachable",
    responses(
        (status = 200, body = ReadinessResponse),
        (status = 503, description = "One or more databases unavailable")
    )
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ReadinessResponse>), ApiError> {
    let databases = state.service.readiness().await.map_err(ApiError::from)?;

    let status = if databases.iter().all(|db| db.healthy) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(ReadinessResponse { databases })))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{root_path}/health"), get(liveness))
        .route(&format!("{root_path}/health/ready"), get(readiness))
}
