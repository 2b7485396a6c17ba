use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection};
use std::sync::Arc;

use crate::modules::contact::application::domain::entities::{MessageRecord, NewMessage};
use crate::modules::contact::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError,
};

use super::sea_orm_entity::ActiveModel;

#[derive(Debug, Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError> {
        let saved = ActiveModel::from(message)
            .insert(&*self.db)
            .await
            .map_err(|e| MessageRepositoryError::DatabaseError(e.to_string()))?;

        Ok(saved.to_record())
    }
}
