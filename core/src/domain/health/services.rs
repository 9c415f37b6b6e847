use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    feedback::ports::FeedbackRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    nutrition::ports::NutritionAdvisor,
    session::ports::SessionProvider,
};

impl<SP, A, F, H> HealthCheckService for Service<SP, A, F, H>
where
    SP: SessionProvider,
    A: NutritionAdvisor,
    F: FeedbackRepository,
    H: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<Vec<DatabaseHealthStatus>, CoreError> {
        self.health_check_repository.readiness().await
    }
}
