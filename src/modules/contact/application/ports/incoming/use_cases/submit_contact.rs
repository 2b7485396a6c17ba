use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactReceipt;
use crate::modules::contact::application::ports::incoming::use_cases::ContactCommand;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Accepts a contact message. When the datastore is offline the message is
/// acknowledged with a local id instead of being stored.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, command: ContactCommand) -> Result<ContactReceipt, SubmitContactError>;
}
