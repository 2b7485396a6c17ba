use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::experience::application::domain::entities::{
    EmploymentType, ExperienceRecord, NewExperience,
};
use crate::shared::datastore::{from_json, to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub role: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub company: String,

    pub period: String,
    pub duration: String,
    pub location: String,
    pub employment_type: String,

    #[sea_orm(column_type = "String(StringLen::N(300))")]
    pub description: String,

    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub long_description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub achievements: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub metrics: Json,

    pub color: Option<String>,
    pub bg_color: Option<String>,
    pub border_color: Option<String>,
    pub display_order: i32,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<ExperienceRecord, String> {
        let employment_type = self
            .employment_type
            .parse::<EmploymentType>()
            .map_err(|e| e.to_string())?;

        Ok(ExperienceRecord {
            id: self.id,
            role: self.role.clone(),
            company: self.company.clone(),
            period: self.period.clone(),
            duration: self.duration.clone(),
            location: self.location.clone(),
            employment_type,
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            achievements: from_json(&self.achievements)?,
            technologies: from_json(&self.technologies)?,
            metrics: from_json(&self.metrics)?,
            color: self.color.clone(),
            bg_color: self.bg_color.clone(),
            border_color: self.border_color.clone(),
            display_order: self.display_order,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl ActiveModel {
    pub fn from_draft(draft: NewExperience) -> Result<Self, String> {
        let now = Utc::now().fixed_offset();
        Ok(Self {
            id: Set(Uuid::new_v4()),
            role: Set(draft.role),
            company: Set(draft.company),
            period: Set(draft.period),
            duration: Set(draft.duration),
            location: Set(draft.location),
            employment_type: Set(draft.employment_type.to_string()),
            description: Set(draft.description),
            long_description: Set(draft.long_description),
            achievements: Set(to_json(&draft.achievements)?),
            technologies: Set(to_json(&draft.technologies)?),
            metrics: Set(to_json(&draft.metrics)?),
            color: Set(draft.color),
            bg_color: Set(draft.bg_color),
            border_color: Set(draft.border_color),
            display_order: Set(draft.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
