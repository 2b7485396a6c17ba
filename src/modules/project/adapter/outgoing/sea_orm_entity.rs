use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::project::application::domain::entities::{
    NewProject, ProjectCategory, ProjectRecord, ProjectStatus,
};
use crate::shared::datastore::{from_json, to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,

    pub category: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub description: String,

    #[sea_orm(column_type = "String(StringLen::N(1000))")]
    pub long_description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tech: Json,

    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub href: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub demo_href: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub metrics: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    pub display_order: i32,
    pub featured: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<ProjectRecord, String> {
        Ok(ProjectRecord {
            id: self.id,
            title: self.title.clone(),
            category: self
                .category
                .parse::<ProjectCategory>()
                .map_err(|e| e.to_string())?,
            desc: self.description.clone(),
            long_desc: self.long_description.clone(),
            tech: from_json(&self.tech)?,
            status: self
                .status
                .parse::<ProjectStatus>()
                .map_err(|e| e.to_string())?,
            href: self.href.clone(),
            demo_href: self.demo_href.clone(),
            metrics: from_json(&self.metrics)?,
            features: from_json(&self.features)?,
            image: self.image.clone(),
            display_order: self.display_order,
            featured: self.featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl ActiveModel {
    pub fn from_draft(draft: NewProject) -> Result<Self, String> {
        let now = Utc::now().fixed_offset();
        Ok(Self {
            id: Set(Uuid::new_v4()),
            title: Set(draft.title),
            category: Set(draft.category.to_string()),
            description: Set(draft.desc),
            long_description: Set(draft.long_desc),
            tech: Set(to_json(&draft.tech)?),
            status: Set(draft.status.to_string()),
            href: Set(draft.href),
            demo_href: Set(draft.demo_href),
            metrics: Set(to_json(&draft.metrics)?),
            features: Set(to_json(&draft.features)?),
            image: Set(draft.image),
            display_order: Set(draft.display_order),
            featured: Set(draft.featured),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
