use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::sync::Arc;

use crate::modules::experience::adapter::outgoing::sea_orm_entity as experiences;
use crate::modules::experience::application::domain::entities::NewExperience;
use crate::modules::project::adapter::outgoing::sea_orm_entity as projects;
use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::seed::application::domain::seed_report::SeedCollection;
use crate::modules::seed::application::ports::outgoing::{SeedStore, SeedStoreError};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::{certifications, skills};
use crate::modules::skill::application::domain::entities::{NewCertification, NewSkill};

#[derive(Debug, Clone)]
pub struct SeedStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl SeedStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> SeedStoreError {
    SeedStoreError::DatabaseError(e.to_string())
}

fn encoding(collection: SeedCollection) -> impl Fn(String) -> SeedStoreError {
    move |reason| SeedStoreError::Encoding { collection, reason }
}

#[async_trait]
impl SeedStore for SeedStorePostgres {
    async fn count(&self, collection: SeedCollection) -> Result<u64, SeedStoreError> {
        let db = &*self.db;
        match collection {
            SeedCollection::Skills => skills::Entity::find().count(db).await,
            SeedCollection::Experiences => experiences::Entity::find().count(db).await,
            SeedCollection::Projects => projects::Entity::find().count(db).await,
            SeedCollection::Certifications => certifications::Entity::find().count(db).await,
        }
        .map_err(db_err)
    }

    async fn insert_skills(&self, items: Vec<NewSkill>) -> Result<u64, SeedStoreError> {
        if items.is_empty() {
            return Ok(0);
        }
        let models = items.into_iter().map(skills::ActiveModel::from_draft);

        skills::Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert_experiences(&self, items: Vec<NewExperience>) -> Result<u64, SeedStoreError> {
        if items.is_empty() {
            return Ok(0);
        }
        let models = items
            .into_iter()
            .map(experiences::ActiveModel::from_draft)
            .collect::<Result<Vec<_>, _>>()
            .map_err(encoding(SeedCollection::Experiences))?;

        experiences::Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert_projects(&self, items: Vec<NewProject>) -> Result<u64, SeedStoreError> {
        if items.is_empty() {
            return Ok(0);
        }
        let models = items
            .into_iter()
            .map(projects::ActiveModel::from_draft)
            .collect::<Result<Vec<_>, _>>()
            .map_err(encoding(SeedCollection::Projects))?;

        projects::Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)
    }

    async fn insert_certifications(
        &self,
        items: Vec<NewCertification>,
    ) -> Result<u64, SeedStoreError> {
        if items.is_empty() {
            return Ok(0);
        }
        let models = items
            .into_iter()
            .map(certifications::ActiveModel::from_draft)
            .collect::<Result<Vec<_>, _>>()
            .map_err(encoding(SeedCollection::Certifications))?;

        certifications::Entity::insert_many(models)
            .exec_without_returning(&*self.db)
            .await
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Value};

    use crate::modules::seed::application::domain::demo_dataset::{demo_projects, demo_skills};

    #[tokio::test]
    async fn count_reads_num_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[btreemap! {
                "num_items" => Into::<Value>::into(21i64),
            }]])
            .into_connection();

        let store = SeedStorePostgres::new(Arc::new(db));

        assert_eq!(store.count(SeedCollection::Skills).await, Ok(21));
    }

    #[tokio::test]
    async fn insert_skills_reports_rows_written() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 21,
            }])
            .into_connection();

        let store = SeedStorePostgres::new(Arc::new(db));

        assert_eq!(store.insert_skills(demo_skills()).await, Ok(21));
    }

    #[tokio::test]
    async fn empty_batch_skips_the_database() {
        // No results queued: any statement would fail.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let store = SeedStorePostgres::new(Arc::new(db));

        assert_eq!(store.insert_projects(vec![]).await, Ok(0));
    }

    #[tokio::test]
    async fn insert_failure_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Exec(RuntimeErr::Internal("no table".into()))])
            .into_connection();

        let store = SeedStorePostgres::new(Arc::new(db));

        assert!(matches!(
            store.insert_projects(demo_projects()).await,
            Err(SeedStoreError::DatabaseError(_))
        ));
    }
}
