use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::AboutRecord;

/// Validated values written on create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct AboutFields {
    pub name: String,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("About information not found")]
    NotFound,

    #[error("{0} already exists")]
    DuplicateKey(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    async fn create(&self, fields: AboutFields) -> Result<AboutRecord, AboutRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        fields: AboutFields,
    ) -> Result<AboutRecord, AboutRepositoryError>;

    /// Removes the entry and returns it as it was.
    async fn delete(&self, id: Uuid) -> Result<AboutRecord, AboutRepositoryError>;
}
