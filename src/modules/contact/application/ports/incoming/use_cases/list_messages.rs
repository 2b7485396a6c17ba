use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::MessageInbox;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Failed to fetch messages: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<MessageInbox, ListMessagesError>;
}
