use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceOverview;
use crate::shared::content::Resolved;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetExperienceError {
    #[error("Failed to fetch experience: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resolved<ExperienceOverview>, GetExperienceError>;
}
