use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::about::application::domain::entities::AboutRecord;
use crate::modules::about::application::ports::outgoing::{AboutQuery, AboutQueryError};

use super::sea_orm_entity::{Column as AboutColumn, Entity as AboutEntity};

#[derive(Debug, Clone)]
pub struct AboutQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AboutQuery for AboutQueryPostgres {
    async fn latest(&self) -> Result<Option<AboutRecord>, AboutQueryError> {
        let model = AboutEntity::find()
            .order_by_desc(AboutColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|e| AboutQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use uuid::Uuid;

    use super::super::sea_orm_entity::Model as AboutModel;

    fn about_model(name: &str) -> AboutModel {
        let now = Utc::now().fixed_offset();
        AboutModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            bio: "Bio".to_string(),
            photo: "p.png".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn latest_returns_newest_record() {
        let newest = about_model("Newest");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newest.clone()]])
            .into_connection();

        let query = AboutQueryPostgres::new(Arc::new(db));

        let result = query.latest().await.unwrap();

        let record = result.expect("record expected");
        assert_eq!(record.id, newest.id);
        assert_eq!(record.name, "Newest");
    }

    #[tokio::test]
    async fn latest_is_none_when_table_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<AboutModel>::new()])
            .into_connection();

        let query = AboutQueryPostgres::new(Arc::new(db));

        assert_eq!(query.latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".into(),
            ))])
            .into_connection();

        let query = AboutQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.latest().await,
            Err(AboutQueryError::DatabaseError(_))
        ));
    }
}
