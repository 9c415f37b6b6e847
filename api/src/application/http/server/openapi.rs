use utoipa::OpenApi;

use crate::application::http::{health::HealthApiDoc, nutrition::router::NutritionApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutrimate API"
    ),
    nest(
        (path = "", api = NutritionApiDoc),
        (path = "", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
