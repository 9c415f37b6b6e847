use anyhow::Context;

use crate::{
    domain::common::{NutrimateConfig, services::Service},
    infrastructure::{
        db::{Postgres, PostgresConfig, PostgresSessionManager},
        feedback::PostgresFeedbackRepository,
        health::PostgresHealthCheckRepository,
        nutrition::{GeminiLLMClient, GeminiNutritionAdvisor},
    },
};

pub type NutrimateService = Service<
    PostgresSessionManager,
    GeminiNutritionAdvisor<GeminiLLMClient>,
    PostgresFeedbackRepository,
    PostgresHealthCheckRepository,
>;

/// Connects both logical databases, applies their migrations and assembles
/// the concrete service used by the HTTP layer.
pub async fn create_service(config: NutrimateConfig) -> Result<NutrimateService, anyhow::Error> {
    let user = Postgres::new(PostgresConfig {
        database_url: config.user_database.connection_url(),
    })
    .await
    .context("failed to connect to the user database")?;

    let health = Postgres::new(PostgresConfig {
        database_url: config.health_database.connection_url(),
    })
    .await
    .context("failed to connect to the health database")?;

    let sessions = PostgresSessionManager::new(user.get_db(), health.get_db());
    sessions
        .migrate()
        .await
        .context("failed to run database migrations")?;

    let feedback_repository = PostgresFeedbackRepository::new(user.get_db());
    let health_check_repository =
        PostgresHealthCheckRepository::new(user.get_db(), health.get_db());
    let llm = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model);
    let advisor = GeminiNutritionAdvisor::new(llm);

    Ok(Service::new(
        sessions,
        advisor,
        feedback_repository,
        health_check_repository,
    ))
}
