use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError>;
}
