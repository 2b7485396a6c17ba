use async_trait::async_trait;

use crate::modules::skill::application::{
    domain::{entities::SkillsOverview, static_content::StaticSkillsContent},
    ports::incoming::use_cases::{GetSkillsError, GetSkillsUseCase},
    ports::outgoing::SkillQuery,
};
use crate::shared::content::{ContentResolver, Resolved};

#[derive(Clone)]
pub struct GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    query: Q,
    resolver: ContentResolver,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    pub fn new(query: Q, resolver: ContentResolver) -> Self {
        Self { query, resolver }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Resolved<SkillsOverview>, GetSkillsError> {
        let query = &self.query;

        // A connected but empty table still answers from the database.
        self.resolver
            .resolve(&StaticSkillsContent, move || async move {
                let skills = query
                    .list_skills()
                    .await
                    .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))?;
                let certifications = query
                    .list_certifications()
                    .await
                    .map_err(|e| GetSkillsError::QueryFailed(e.to_string()))?;

                Ok(Some(SkillsOverview::from_records(skills, certifications)))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::skill::application::domain::entities::{
        CertificationRecord, SkillCategory, SkillRecord,
    };
    use crate::modules::skill::application::ports::outgoing::SkillQueryError;
    use crate::shared::content::{ContentSource, FallbackContent};
    use crate::tests::support::stubs::StubDatastoreProbe;

    mock! {
        pub SkillQueryMock {}
        #[async_trait]
        impl SkillQuery for SkillQueryMock {
            async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillQueryError>;
            async fn list_certifications(&self) -> Result<Vec<CertificationRecord>, SkillQueryError>;
        }
    }

    fn skill(name: &str, level: u8) -> SkillRecord {
        SkillRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: SkillCategory::Backend,
            level,
            description: "desc".to_string(),
            icon: Some("🦀".to_string()),
            color: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn service(query: MockSkillQueryMock, online: bool) -> GetSkillsService<MockSkillQueryMock> {
        let probe = if online {
            StubDatastoreProbe::online()
        } else {
            StubDatastoreProbe::offline()
        };
        GetSkillsService::new(query, ContentResolver::new(Arc::new(probe)))
    }

    #[tokio::test]
    async fn offline_serves_static_overview_without_querying() {
        // Arrange
        let mut query = MockSkillQueryMock::new();
        query.expect_list_skills().never();
        query.expect_list_certifications().never();

        // Act
        let resolved = service(query, false).execute().await.unwrap();

        // Assert
        assert_eq!(resolved.source, ContentSource::Static);
        assert_eq!(resolved.data, StaticSkillsContent.offline());
    }

    #[tokio::test]
    async fn online_builds_overview_from_records() {
        // Arrange
        let mut query = MockSkillQueryMock::new();
        query
            .expect_list_skills()
            .times(1)
            .returning(|| Ok(vec![skill("Rust", 95), skill("Go", 70)]));
        query
            .expect_list_certifications()
            .times(1)
            .returning(|| Ok(vec![]));

        // Act
        let resolved = service(query, true).execute().await.unwrap();

        // Assert
        assert_eq!(resolved.source, ContentSource::Database);
        assert_eq!(resolved.data.summary.total_skills, 2);
        assert_eq!(resolved.data.summary.average_proficiency, 83);
        assert_eq!(
            resolved.data.categories[&SkillCategory::Backend][0].name,
            "Rust"
        );
    }

    #[tokio::test]
    async fn online_and_empty_is_still_database() {
        let mut query = MockSkillQueryMock::new();
        query.expect_list_skills().returning(|| Ok(vec![]));
        query.expect_list_certifications().returning(|| Ok(vec![]));

        let resolved = service(query, true).execute().await.unwrap();

        assert_eq!(resolved.source, ContentSource::Database);
        assert!(resolved.data.categories.is_empty());
    }

    #[tokio::test]
    async fn query_failure_is_reported() {
        let mut query = MockSkillQueryMock::new();
        query
            .expect_list_skills()
            .returning(|| Err(SkillQueryError::DatabaseError("db down".to_string())));
        query.expect_list_certifications().never();

        let result = service(query, true).execute().await;

        match result {
            Err(GetSkillsError::QueryFailed(msg)) => assert!(msg.contains("db down")),
            other => panic!("Expected QueryFailed, got {:?}", other.map(|r| r.source)),
        }
    }
}
