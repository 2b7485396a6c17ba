use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::ExperienceRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// All experiences in display order.
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceQueryError>;
}
