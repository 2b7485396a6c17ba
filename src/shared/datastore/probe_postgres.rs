use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::debug;

use crate::shared::datastore::DatastoreProbe;

#[derive(Debug, Clone)]
pub struct PostgresProbe {
    db: Arc<DatabaseConnection>,
}

impl PostgresProbe {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DatastoreProbe for PostgresProbe {
    async fn is_available(&self) -> bool {
        match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                debug!("Datastore probe failed: {}", e);
                false
            }
        }
    }
}
