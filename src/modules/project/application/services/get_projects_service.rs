use async_trait::async_trait;

use crate::modules::project::application::{
    domain::{entities::ProjectsOverview, static_content::StaticProjectsContent},
    ports::incoming::use_cases::{GetProjectsError, GetProjectsUseCase},
    ports::outgoing::{ProjectQuery, ProjectQueryError},
};
use crate::shared::content::{ContentResolver, Resolved};

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        GetProjectsError::QueryFailed(err.to_string())
    }
}

#[derive(Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
    resolver: ContentResolver,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q, resolver: ContentResolver) -> Self {
        Self { query, resolver }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Resolved<ProjectsOverview>, GetProjectsError> {
        let query = &self.query;

        self.resolver
            .resolve(&StaticProjectsContent, move || async move {
                let records = query.list().await?;
                Ok::<_, GetProjectsError>(Some(ProjectsOverview::from_records(records)))
            })
            .await
    }
}
