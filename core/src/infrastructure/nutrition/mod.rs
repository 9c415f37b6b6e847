pub mod advisor;
pub mod gemini;
pub mod mappers;

pub use advisor::GeminiNutritionAdvisor;
pub use gemini::GeminiLLMClient;
