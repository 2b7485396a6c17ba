use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::AboutRecord;
use crate::modules::about::application::ports::outgoing::{
    AboutFields, AboutRepository, AboutRepositoryError,
};
use crate::shared::datastore::{duplicate_key_field, is_duplicate_key};

use super::sea_orm_entity::{ActiveModel, Column, Entity};

#[derive(Debug, Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn create(&self, fields: AboutFields) -> Result<AboutRecord, AboutRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(fields.name),
            bio: Set(fields.bio),
            photo: Set(fields.photo),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn update(
        &self,
        id: Uuid,
        fields: AboutFields,
    ) -> Result<AboutRecord, AboutRepositoryError> {
        let changes = ActiveModel {
            name: Set(fields.name),
            bio: Set(fields.bio),
            photo: Set(fields.photo),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(|m| m.to_record())
            .ok_or(AboutRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<AboutRecord, AboutRepositoryError> {
        let existing = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutRepositoryError::NotFound)?;

        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Lost a race with another delete.
        if result.rows_affected == 0 {
            return Err(AboutRepositoryError::NotFound);
        }

        Ok(existing.to_record())
    }
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    if is_duplicate_key(&e) {
        AboutRepositoryError::DuplicateKey(duplicate_key_field(&e))
    } else {
        AboutRepositoryError::DatabaseError(e.to_string())
    }
}
