use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::skill::application::domain::entities::{CertificationRecord, SkillRecord};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

use super::sea_orm_entity::{certifications, skills};

#[derive(Debug, Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillQueryError> {
        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Category)
            .order_by_desc(skills::Column::Level)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        models
            .iter()
            .map(|m| m.to_record().map_err(SkillQueryError::CorruptRecord))
            .collect()
    }

    async fn list_certifications(&self) -> Result<Vec<CertificationRecord>, SkillQueryError> {
        let models = certifications::Entity::find()
            .order_by_desc(certifications::Column::Date)
            .all(&*self.db)
            .await
            .map_err(|e| SkillQueryError::DatabaseError(e.to_string()))?;

        models
            .iter()
            .map(|m| m.to_record().map_err(SkillQueryError::CorruptRecord))
            .collect()
    }
}
