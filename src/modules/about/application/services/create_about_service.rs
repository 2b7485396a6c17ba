use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::about::application::{
    domain::entities::AboutRecord,
    ports::incoming::use_cases::{AboutCommand, CreateAboutError, CreateAboutUseCase},
    ports::outgoing::{AboutRepository, AboutRepositoryError},
};
use crate::shared::datastore::DatastoreProbe;

impl From<AboutRepositoryError> for CreateAboutError {
    fn from(err: AboutRepositoryError) -> Self {
        match err {
            AboutRepositoryError::DuplicateKey(field) => CreateAboutError::DuplicateKey(field),
            other => CreateAboutError::RepositoryError(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct CreateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    repository: R,
    probe: Arc<dyn DatastoreProbe>,
}

impl<R> CreateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    pub fn new(repository: R, probe: Arc<dyn DatastoreProbe>) -> Self {
        Self { repository, probe }
    }
}

#[async_trait]
impl<R> CreateAboutUseCase for CreateAboutService<R>
where
    R: AboutRepository + Send + Sync,
{
    async fn execute(&self, command: AboutCommand) -> Result<AboutRecord, CreateAboutError> {
        if !self.probe.is_available().await {
            return Err(CreateAboutError::DatastoreUnavailable);
        }

        Ok(self.repository.create(command.into_fields()).await?)
    }
}
