use async_trait::async_trait;

use crate::modules::about::application::{
    domain::{entities::AboutContent, static_content::StaticAboutContent},
    ports::incoming::use_cases::{GetAboutError, GetAboutUseCase},
    ports::outgoing::AboutQuery,
};
use crate::shared::content::{ContentResolver, Resolved};

#[derive(Clone)]
pub struct GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    query: Q,
    resolver: ContentResolver,
}

impl<Q> GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    pub fn new(query: Q, resolver: ContentResolver) -> Self {
        Self { query, resolver }
    }
}

#[async_trait]
impl<Q> GetAboutUseCase for GetAboutService<Q>
where
    Q: AboutQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Resolved<AboutContent>, GetAboutError> {
        let query = &self.query;

        self.resolver
            .resolve(&StaticAboutContent, move || async move {
                query
                    .latest()
                    .await
                    .map(|record| record.map(AboutContent::Record))
                    .map_err(|e| GetAboutError::QueryFailed(e.to_string()))
            })
            .await
    }
}
