use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::{
    domain::entities::AboutRecord, ports::incoming::use_cases::AboutCommand,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateAboutError {
    #[error("Database not connected")]
    DatastoreUnavailable,

    #[error("About information not found")]
    NotFound,

    #[error("{0} already exists")]
    DuplicateKey(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAboutUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        command: AboutCommand,
    ) -> Result<AboutRecord, UpdateAboutError>;
}
