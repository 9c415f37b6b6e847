pub mod food_nutrition;
pub mod start_chat;
pub mod submit_feedback;
