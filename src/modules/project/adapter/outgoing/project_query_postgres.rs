use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use tracing::warn;

use crate::modules::project::application::domain::entities::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        models
            .iter()
            .map(|m| {
                m.to_record().map_err(|e| {
                    warn!("Project {} could not be read: {}", m.id, e);
                    ProjectQueryError::CorruptRecord(e)
                })
            })
            .collect()
    }
}
