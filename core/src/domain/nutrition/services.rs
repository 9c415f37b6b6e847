use crate::domain::{
    common::{
        entities::{app_errors::CoreError, identity::UserIdentity},
        services::Service,
    },
    feedback::{
        entities::{FeedbackRecord, FeedbackType},
        ports::FeedbackRepository,
    },
    health::ports::HealthCheckRepository,
    nutrition::{
        entities::FoodNutrition,
        ports::{NutritionAdvisor, NutritionService},
        value_objects::{DailyFeedbackInput, FoodNutritionInput, StartChatInput},
    },
    session::{entities::LogicalDb, ports::SessionProvider},
};

impl<SP, A, F, H> NutritionService for Service<SP, A, F, H>
where
    SP: SessionProvider,
    A: NutritionAdvisor,
    F: FeedbackRepository,
    H: HealthCheckRepository,
{
    async fn start_chat(
        &self,
        user: UserIdentity,
        input: StartChatInput,
    ) -> Result<String, CoreError> {
        let session = self.session_provider.session(LogicalDb::User).await?;

        self.advisor
            .chat_response(session, user, input.user_input)
            .await
    }

    async fn daily_feedback(
        &self,
        user: UserIdentity,
        input: DailyFeedbackInput,
    ) -> Result<FeedbackRecord, CoreError> {
        // The feedbacks table keys on an integer user id; anonymous callers
        // are rejected up front instead of failing inside the repository.
        let user_id = user.id().ok_or(CoreError::IdentityRequired)?;

        let user_session = self.session_provider.session(LogicalDb::User).await?;
        let health_session = self.session_provider.session(LogicalDb::Health).await?;

        let feedback = self
            .advisor
            .daily_feedback(user_session, health_session, user_id, input.feedback_date)
            .await?;

        let record = FeedbackRecord::new(
            user_id,
            feedback,
            FeedbackType::Nutrition,
            input.feedback_date,
        );

        self.feedback_repository.insert(record).await
    }

    async fn food_nutrition(&self, input: FoodNutritionInput) -> Result<FoodNutrition, CoreError> {
        let session = self.session_provider.session(LogicalDb::Health).await?;

        self.advisor.food_nutrition(session, input.food_name).await
    }
}
