use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::about::application::{
    domain::entities::AboutRecord,
    ports::incoming::use_cases::{DeleteAboutError, DeleteAboutUseCase},
    ports::outgoing::{AboutRepository, AboutRepositoryError},
};
use crate::shared::datastore::DatastoreProbe;

impl From<AboutRepositoryError> for DeleteAboutError {
    fn from(err: AboutRepositoryError) -> Self {
        match err {
            AboutRepositoryError::NotFound => DeleteAboutError::NotFound,
            other => DeleteAboutError::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct DeleteAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    repository: R,
    probe: Arc<dyn DatastoreProbe>,
}

impl<R> DeleteAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    pub fn new(repository: R, probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { repository, probe }
    }
}

#[async_trait]
impl<R> DeleteAboutUseCase for DeleteAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<AboutRecord, DeleteAboutError> {
        if !self.probe.is_available().await {
            return Err(DeleteAboutError::DatastoreUnavailable);
        }

        Ok(self.repository.delete(id).await?)
    }
}
