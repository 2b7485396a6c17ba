use async_trait::async_trait;

use crate::modules::about::application::domain::entities::AboutRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AboutQuery: Send + Sync {
    /// Most recently created entry, if any.
    async fn latest(&self) -> Result<Option<AboutRecord>, AboutQueryError>;
}
