use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{MessageRecord, NewMessage};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError>;
}
