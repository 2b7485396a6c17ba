use async_trait::async_trait;

use crate::modules::about::application::{
    domain::entities::AboutRecord, ports::incoming::use_cases::AboutCommand,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateAboutError {
    #[error("Database not connected")]
    DatastoreUnavailable,

    #[error("{0} already exists")]
    DuplicateKey(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateAboutUseCase: Send + Sync {
    async fn execute(&self, command: AboutCommand) -> Result<AboutRecord, CreateAboutError>;
}
