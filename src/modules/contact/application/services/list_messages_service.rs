use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::contact::application::{
    domain::entities::MessageInbox,
    ports::incoming::use_cases::{ListMessagesError, ListMessagesUseCase},
    ports::outgoing::{MessageQuery, MessageQueryError},
};
use crate::shared::datastore::DatastoreProbe;

impl From<MessageQueryError> for ListMessagesError {
    fn from(err: MessageQueryError) -> Self {
        ListMessagesError::QueryFailed(err.to_string())
    }
}

#[derive(Clone)]
pub struct ListMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    query: Q,
    probe: Arc<dyn DatastoreProbe>,
}

impl<Q> ListMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    pub fn new(query: Q, probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { query, probe }
    }
}

#[async_trait]
impl<Q> ListMessagesUseCase for ListMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self) -> Result<MessageInbox, ListMessagesError> {
        if !self.probe.is_available().await {
            return Ok(MessageInbox::Offline);
        }

        Ok(MessageInbox::Messages(self.query.list_newest_first().await?))
    }
}
