use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::contact::application::{
    domain::entities::ContactReceipt,
    ports::incoming::use_cases::{ContactCommand, SubmitContactError, SubmitContactUseCase},
    ports::outgoing::{MessageRepository, MessageRepositoryError},
};
use crate::shared::datastore::DatastoreProbe;

impl From<MessageRepositoryError> for SubmitContactError {
    fn from(err: MessageRepositoryError) -> Self {
        SubmitContactError::RepositoryError(err.to_string())
    }
}

#[derive(Clone)]
pub struct SubmitContactService<R>
where
    R: MessageRepository + Send + Sync,
{
    repository: R,
    probe: Arc<dyn DatastoreProbe>,
}

impl<R> SubmitContactService<R>
where
    R: MessageRepository + Send + Sync,
{
    pub fn new(repository: R, probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { repository, probe }
    }
}

#[async_trait]
impl<R> SubmitContactUseCase for SubmitContactService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, command: ContactCommand) -> Result<ContactReceipt, SubmitContactError> {
        if !self.probe.is_available().await {
            warn!(
                name = command.name(),
                email = command.email(),
                message = %command.preview(),
                "Database not connected, but message received"
            );
            return Ok(ContactReceipt::local(Utc::now()));
        }

        let saved = self.repository.create(command.into_new_message()).await?;
        info!("Contact message {} saved", saved.id);

        Ok(ContactReceipt::stored(saved.id))
    }
}
