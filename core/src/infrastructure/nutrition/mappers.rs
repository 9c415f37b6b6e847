use crate::{domain::nutrition::entities::FoodNutrition, entity::foods};

impl From<foods::Model> for FoodNutrition {
    fn from(model: foods::Model) -> Self {
        Self {
            food_id: model.food_id,
            food_name: model.food_name,
            calorie: model.calorie,
            carbohydrate: model.carbohydrate,
            protein: model.protein,
            fat: model.fat,
            sugar: model.sugar,
            sodium: model.sodium,
            base_amount: model.base_amount,
        }
    }
}
