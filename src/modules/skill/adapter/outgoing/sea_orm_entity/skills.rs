use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::skill::application::domain::entities::{
    NewSkill, SkillCategory, SkillRecord,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,

    // Display string of `SkillCategory`.
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub category: String,

    pub level: i16,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub color: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<SkillRecord, String> {
        let category = self
            .category
            .parse::<SkillCategory>()
            .map_err(|e| e.to_string())?;
        let level = u8::try_from(self.level)
            .map_err(|_| format!("Skill level out of range: {}", self.level))?;

        Ok(SkillRecord {
            id: self.id,
            name: self.name.clone(),
            category,
            level,
            description: self.description.clone(),
            icon: self.icon.clone(),
            color: self.color.clone(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl ActiveModel {
    pub fn from_draft(draft: NewSkill) -> Self {
        let now = Utc::now().fixed_offset();
        Self {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            category: Set(draft.category.as_str().to_string()),
            level: Set(i16::from(draft.level)),
            description: Set(draft.description),
            icon: Set(draft.icon),
            color: Set(draft.color),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
