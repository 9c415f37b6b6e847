use axum::extract::State;
use nutrimate_core::domain::nutrition::{
    entities::FoodNutrition, ports::NutritionService, value_objects::FoodNutritionInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    nutrition::validators::FoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutritionResponse {
    pub food_id: i32,
    pub food_name: String,
    pub calorie: i32,
    pub carbohydrate: Option<f64>,
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub base_amount: Option<String>,
}

impl From<FoodNutrition> for FoodNutritionResponse {
    fn from(facts: FoodNutrition) -> Self {
        Self {
            food_id: facts.food_id,
            food_name: facts.food_name,
            calorie: facts.calorie,
            carbohydrate: facts.carbohydrate,
            protein: facts.protein,
            fat: facts.fat,
            sugar: facts.sugar,
            sodium: facts.sodium,
            base_amount: facts.base_amount,
        }
    }
}

#[utoipa::path(
    post,
    path = "/nutrition_food",
    tag = "nutrition",
    summary = "Look up nutrition facts for a food",
    request_body = FoodRequest,
    responses(
        (status = 200, body = FoodNutritionResponse),
        (status = 404, description = "Food not found")
    )
)]
pub async fn food_nutrition(
    State(state): State<AppState>,
    ValidateJson(request): ValidateJson<FoodRequest>,
) -> Result<Response<FoodNutritionResponse>, ApiError> {
    let facts = state
        .service
        .food_nutrition(FoodNutritionInput {
            food_name: request.food_name,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FoodNutritionResponse::from(facts)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_the_collaborator_fields_unchanged() {
        let facts = FoodNutrition {
            food_id: 12,
            food_name: "oatmeal".to_string(),
            calorie: 389,
            carbohydrate: Some(66.3),
            protein: Some(16.9),
            fat: Some(6.9),
            sugar: Some(0.99),
            sodium: Some(2.0),
            base_amount: Some("100g".to_string()),
        };

        let response = FoodNutritionResponse::from(facts.clone());

        assert_eq!(response.food_id, facts.food_id);
        assert_eq!(response.food_name, facts.food_name);
        assert_eq!(response.calorie, facts.calorie);
        assert_eq!(response.carbohydrate, facts.carbohydrate);
        assert_eq!(response.protein, facts.protein);
        assert_eq!(response.fat, facts.fat);
        assert_eq!(response.sugar, facts.sugar);
        assert_eq!(response.sodium, facts.sodium);
        assert_eq!(response.base_amount, facts.base_amount);
    }

    #[test]
    fn response_serializes_in_camel_case() {
        let response = FoodNutritionResponse {
            food_id: 1,
            food_name: "rice".to_string(),
            calorie: 130,
            carbohydrate: Some(28.2),
            protein: Some(2.7),
            fat: None,
            sugar: None,
            sodium: None,
            base_amount: Some("100g".to_string()),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["foodName"], "rice");
        assert_eq!(json["baseAmount"], "100g");
    }
}
