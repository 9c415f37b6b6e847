use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    food_nutrition::{__path_food_nutrition, food_nutrition},
    start_chat::{__path_start_chat, start_chat},
    submit_feedback::{__path_submit_feedback, submit_feedback},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(start_chat, submit_feedback, food_nutrition))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/nutrition_chat", state.args.server.root_path),
            post(start_chat),
        )
        .route(
            &format!("{}/nutrition_feedback", state.args.server.root_path),
            post(submit_feedback),
        )
        .route(
            &format!("{}/nutrition_food", state.args.server.root_path),
            post(food_nutrition),
        )
}
