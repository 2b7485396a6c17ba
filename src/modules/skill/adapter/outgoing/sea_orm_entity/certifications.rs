use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::skill::application::domain::entities::{
    CertificationRecord, NewCertification,
};
use crate::shared::datastore::{from_json, to_json};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub issuer: String,

    pub date: String,

    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub credential_id: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> Result<CertificationRecord, String> {
        Ok(CertificationRecord {
            id: self.id,
            name: self.name.clone(),
            issuer: self.issuer.clone(),
            date: self.date.clone(),
            credential_id: self.credential_id.clone(),
            credential_url: self.credential_url.clone(),
            image: self.image.clone(),
            skills: from_json(&self.skills)?,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl ActiveModel {
    pub fn from_draft(draft: NewCertification) -> Result<Self, String> {
        let now = Utc::now().fixed_offset();
        Ok(Self {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            issuer: Set(draft.issuer),
            date: Set(draft.date),
            credential_id: Set(draft.credential_id),
            credential_url: Set(draft.credential_url),
            image: Set(draft.image),
            skills: Set(to_json(&draft.skills)?),
            created_at: Set(now),
            updated_at: Set(now),
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
