use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::about::application::{
    domain::entities::AboutRecord,
    ports::incoming::use_cases::{AboutCommand, UpdateAboutError, UpdateAboutUseCase},
    ports::outgoing::{AboutRepository, AboutRepositoryError},
};
use crate::shared::datastore::DatastoreProbe;

impl From<AboutRepositoryError> for UpdateAboutError {
    fn from(err: AboutRepositoryError) -> Self {
        match err {
            AboutRepositoryError::NotFound => UpdateAboutError::NotFound,
            AboutRepositoryError::DuplicateKey(field) => UpdateAboutError::DuplicateKey(field),
            AboutRepositoryError::DatabaseError(msg) => UpdateAboutError::RepositoryError(msg),
        }
    }
}

#[derive(Clone)]
pub struct UpdateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    repository: R,
    probe: Arc<dyn DatastoreProbe>,
}

impl<R> UpdateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    pub fn new(repository: R, probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { repository, probe }
    }
}

#[async_trait]
impl<R> UpdateAboutUseCase for UpdateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        command: AboutCommand,
    ) -> Result<AboutRecord, UpdateAboutError> {
        if !self.probe.is_available().await {
            return Err(UpdateAboutError::DatastoreUnavailable);
        }

        Ok(self.repository.update(id, command.into_fields()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::modules::about::application::ports::outgoing::AboutFields;
    use crate::tests::support::stubs::StubDatastoreProbe;

    #[derive(Clone)]
    struct MockAboutRepository {
        result: Result<AboutRecord, AboutRepositoryError>,
    }

    #[async_trait]
    impl AboutRepository for MockAboutRepository {
        async fn create(&self, _fields: AboutFields) -> Result<AboutRecord, AboutRepositoryError> {
            unimplemented!("Not used in update tests")
        }

        async fn update(
            &self,
            id: Uuid,
            fields: AboutFields,
        ) -> Result<AboutRecord, AboutRepositoryError> {
            self.result.clone().map(|mut record| {
                record.id = id;
                record.name = fields.name;
                record
            })
        }

        async fn delete(&self, _id: Uuid) -> Result<AboutRecord, AboutRepositoryError> {
            unimplemented!("Not used in update tests")
        }
    }

    fn existing() -> AboutRecord {
        AboutRecord {
            id: Uuid::nil(),
            name: "Old".to_string(),
            bio: "Bio".to_string(),
            photo: "p.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn command(name: &str) -> AboutCommand {
        AboutCommand::new(
            Some(name.to_string()),
            Some("Bio".to_string()),
            Some("p.png".to_string()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn updates_existing_record() {
        let id = Uuid::new_v4();
        let svc = UpdateAboutService::new(
            MockAboutRepository {
                result: Ok(existing()),
            },
            Arc::new(StubDatastoreProbe::online()),
        );

        let updated = svc.execute(id, command("New")).await.unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "New");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let svc = UpdateAboutService::new(
            MockAboutRepository {
                result: Err(AboutRepositoryError::NotFound),
            },
            Arc::new(StubDatastoreProbe::online()),
        );

        let result = svc.execute(Uuid::new_v4(), command("New")).await;

        assert_eq!(result, Err(UpdateAboutError::NotFound));
    }

    #[tokio::test]
    async fn offline_is_unavailable() {
        let svc = UpdateAboutService::new(
            MockAboutRepository {
                result: Ok(existing()),
            },
            Arc::new(StubDatastoreProbe::offline()),
        );

        let result = svc.execute(Uuid::new_v4(), command("New")).await;

        assert_eq!(result, Err(UpdateAboutError::DatastoreUnavailable));
    }
}
