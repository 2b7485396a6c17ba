use async_trait::async_trait;

use crate::modules::experience::application::{
    domain::{entities::ExperienceOverview, static_content::StaticExperienceContent},
    ports::incoming::use_cases::{GetExperienceError, GetExperienceUseCase},
    ports::outgoing::ExperienceQuery,
};
use crate::shared::content::{ContentResolver, Resolved};

#[derive(Clone)]
pub struct GetExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    query: Q,
    resolver: ContentResolver,
}

impl<Q> GetExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    pub fn new(query: Q, resolver: ContentResolver) -> Self {
        Self { query, resolver }
    }
}

#[async_trait]
impl<Q> GetExperienceUseCase for GetExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Resolved<ExperienceOverview>, GetExperienceError> {
        let query = &self.query;

        self.resolver
            .resolve(&StaticExperienceContent, move || async move {
                let records = query
                    .list()
                    .await
                    .map_err(|e| GetExperienceError::QueryFailed(e.to_string()))?;

                Ok(Some(ExperienceOverview::from_records(records)))
            })
            .await
    }
}
