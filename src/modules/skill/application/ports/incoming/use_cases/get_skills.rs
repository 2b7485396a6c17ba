use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillsOverview;
use crate::shared::content::Resolved;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Failed to fetch skills: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resolved<SkillsOverview>, GetSkillsError>;
}
