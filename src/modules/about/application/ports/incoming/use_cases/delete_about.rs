use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::AboutRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteAboutError {
    #[error("Database not connected")]
    DatastoreUnavailable,

    #[error("About information not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAboutUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<AboutRecord, DeleteAboutError>;
}
