use async_trait::async_trait;

use crate::modules::experience::application::domain::entities::NewExperience;
use crate::modules::project::application::domain::entities::NewProject;
use crate::modules::seed::application::domain::seed_report::SeedCollection;
use crate::modules::skill::application::domain::entities::{NewCertification, NewSkill};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Could not encode {collection} record: {reason}")]
    Encoding {
        collection: SeedCollection,
        reason: String,
    },
}

/// Bulk writes used only by startup seeding. Inserts return the number of rows written.
#[async_trait]
pub trait SeedStore: Send + Sync {
    async fn count(&self, collection: SeedCollection) -> Result<u64, SeedStoreError>;

    async fn insert_skills(&self, skills: Vec<NewSkill>) -> Result<u64, SeedStoreError>;

    async fn insert_experiences(
        &self,
        experiences: Vec<NewExperience>,
    ) -> Result<u64, SeedStoreError>;

    async fn insert_projects(&self, projects: Vec<NewProject>) -> Result<u64, SeedStoreError>;

    async fn insert_certifications(
        &self,
        certifications: Vec<NewCertification>,
    ) -> Result<u64, SeedStoreError>;
}
