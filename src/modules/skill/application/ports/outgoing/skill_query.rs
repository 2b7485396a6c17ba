use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::{CertificationRecord, SkillRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    /// All skills, by category then highest level first.
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillQueryError>;

    /// All certifications, most recent date first.
    async fn list_certifications(&self) -> Result<Vec<CertificationRecord>, SkillQueryError>;
}
