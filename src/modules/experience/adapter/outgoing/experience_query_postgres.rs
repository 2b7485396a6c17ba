use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::experience::application::domain::entities::ExperienceRecord;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

use super::sea_orm_entity::{Column, Entity};

#[derive(Debug, Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;

        models
            .iter()
            .map(|m| m.to_record().map_err(ExperienceQueryError::CorruptRecord))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::experience::adapter::outgoing::sea_orm_entity::Model;
    use crate::modules::experience::application::domain::entities::EmploymentType;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};
    use serde_json::json;
    use uuid::Uuid;

    fn model(role: &str, employment_type: &str, order: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            role: role.to_string(),
            company: "InnovateLab".to_string(),
            period: "2021 - 2023".to_string(),
            duration: "2 years".to_string(),
            location: "Remote".to_string(),
            employment_type: employment_type.to_string(),
            description: "desc".to_string(),
            long_description: "long".to_string(),
            achievements: json!(["Shipped v2"]),
            technologies: json!(["Rust", "Postgres"]),
            metrics: json!({ "uptime": "99.9%" }),
            color: Some("from-green-500 to-emerald-500".to_string()),
            bg_color: None,
            border_color: None,
            display_order: order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn list_maps_json_columns() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Developer", "Full-time", 1)]])
            .into_connection();

        let query = ExperienceQueryPostgres::new(Arc::new(db));

        let records = query.list().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employment_type, EmploymentType::FullTime);
        assert_eq!(records[0].technologies, vec!["Rust", "Postgres"]);
        assert_eq!(records[0].metrics["uptime"], "99.9%");
    }

    #[tokio::test]
    async fn malformed_metrics_are_a_corrupt_record() {
        let mut bad = model("Developer", "Full-time", 1);
        bad.metrics = json!(["not", "a", "map"]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![bad]])
            .into_connection();

        let query = ExperienceQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list().await,
            Err(ExperienceQueryError::CorruptRecord(_))
        ));
    }

    #[tokio::test]
    async fn database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();

        let query = ExperienceQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list().await,
            Err(ExperienceQueryError::DatabaseError(_))
        ));
    }
}
