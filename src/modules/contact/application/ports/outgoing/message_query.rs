use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::MessageRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<MessageRecord>, MessageQueryError>;
}
