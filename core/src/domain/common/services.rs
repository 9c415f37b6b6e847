use crate::domain::{
    feedback::ports::FeedbackRepository, health::ports::HealthCheckRepository,
    nutrition::ports::NutritionAdvisor, session::ports::SessionProvider,
};

/// Aggregate service generic over every port. Concrete wiring lives in
/// `crate::application`; domain modules implement their service traits
/// against this type.
#[derive(Clone)]
pub struct Service<SP, A, F, H>
where
    SP: SessionProvider,
    A: NutritionAdvisor,
    F: FeedbackRepository,
    H: HealthCheckRepository,
{
    pub(crate) session_provider: SP,
    pub(crate) advisor: A,
    pub(crate) feedback_repository: F,
    pub(crate) health_check_repository: H,
}

impl<SP, A, F, H> Service<SP, A, F, H>
where
    SP: SessionProvider,
    A: NutritionAdvisor,
    F: FeedbackRepository,
    H: HealthCheckRepository,
{
    pub fn new(session_provider: SP, advisor: A, feedback_repository: F, health_check_repository: H) -> Self {
        Self {
            session_provider,
            advisor,
            feedback_repository,
            health_check_repository,
        }
    }
}
