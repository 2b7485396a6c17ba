use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectsOverview;
use crate::shared::content::Resolved;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Failed to fetch projects: {0}")]
    QueryFailed(String),
}

/// Showcase of projects with status counts.
#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Resolved<ProjectsOverview>, GetProjectsError>;
}
