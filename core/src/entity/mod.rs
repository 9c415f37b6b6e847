pub mod feedbacks;
pub mod foods;
