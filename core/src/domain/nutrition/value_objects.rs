use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartChatInput {
    pub user_input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyFeedbackInput {
    pub feedback_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodNutritionInput {
    pub food_name: String,
}
