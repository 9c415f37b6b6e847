use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition facts for one catalogued food, as produced by the lookup
/// collaborator. Routes return this value unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodNutrition {
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
