//! Process-local stand-ins for the Postgres adapters, shared through `Arc`
//! so one store can back both the query and the repository side.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::about::application::domain::entities::AboutRecord;
use crate::about::application::ports::outgoing::{
    AboutFields, AboutQuery, AboutQueryError, AboutRepository, AboutRepositoryError,
};
use crate::contact::application::domain::entities::{MessageRecord, NewMessage};
use crate::contact::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageRepository, MessageRepositoryError,
};
use crate::experience::application::domain::entities::ExperienceRecord;
use crate::experience::application::ports::outgoing::{ExperienceQuery, ExperienceQueryError};
use crate::project::application::domain::entities::ProjectRecord;
use crate::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::shared::datastore::DatastoreProbe;
use crate::skill::application::domain::entities::{CertificationRecord, NewSkill, SkillRecord};
use crate::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

// ============================================================
// Probe
// ============================================================

/// Probe whose answer can be flipped while the app is running.
#[derive(Clone)]
pub struct SwitchableProbe {
    online: Arc<AtomicBool>,
}

impl SwitchableProbe {
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

#[async_trait]
impl DatastoreProbe for SwitchableProbe {
    async fn is_available(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}

// ============================================================
// About
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryAboutStore {
    rows: Arc<Mutex<Vec<AboutRecord>>>,
}

impl InMemoryAboutStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl AboutQuery for InMemoryAboutStore {
    async fn latest(&self) -> Result<Option<AboutRecord>, AboutQueryError> {
        Ok(self.rows.lock().unwrap().last().cloned())
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutStore {
    async fn create(&self, fields: AboutFields) -> Result<AboutRecord, AboutRepositoryError> {
        let now = Utc::now();
        let record = AboutRecord {
            id: Uuid::new_v4(),
            name: fields.name,
            bio: fields.bio,
            photo: fields.photo,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: AboutFields,
    ) -> Result<AboutRecord, AboutRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AboutRepositoryError::NotFound)?;

        row.name = fields.name;
        row.bio = fields.bio;
        row.photo = fields.photo;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<AboutRecord, AboutRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let index = rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(AboutRepositoryError::NotFound)?;
        Ok(rows.remove(index))
    }
}

// ============================================================
// Contact
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryMessageStore {
    rows: Arc<Mutex<Vec<MessageRecord>>>,
}

impl InMemoryMessageStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageStore {
    async fn create(&self, message: NewMessage) -> Result<MessageRecord, MessageRepositoryError> {
        let now = Utc::now();
        let record = MessageRecord {
            id: Uuid::new_v4(),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl MessageQuery for InMemoryMessageStore {
    async fn list_newest_first(&self) -> Result<Vec<MessageRecord>, MessageQueryError> {
        // Rows are appended in arrival order.
        Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
    }
}

// ============================================================
// Read-only content
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryContent {
    pub skills: Vec<SkillRecord>,
    pub certifications: Vec<CertificationRecord>,
    pub experiences: Vec<ExperienceRecord>,
    pub projects: Vec<ProjectRecord>,
}

impl InMemoryContent {
    pub fn with_skills(mut self, drafts: Vec<NewSkill>) -> Self {
        let now = Utc::now();
        self.skills = drafts
            .into_iter()
            .map(|draft| SkillRecord {
                id: Uuid::new_v4(),
                name: draft.name,
                category: draft.category,
                level: draft.level,
                description: draft.description,
                icon: draft.icon,
                color: draft.color,
                created_at: now,
                updated_at: now,
            })
            .collect();
        self
    }
}

#[async_trait]
impl SkillQuery for InMemoryContent {
    async fn list_skills(&self) -> Result<Vec<SkillRecord>, SkillQueryError> {
        Ok(self.skills.clone())
    }

    async fn list_certifications(&self) -> Result<Vec<CertificationRecord>, SkillQueryError> {
        Ok(self.certifications.clone())
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryContent {
    async fn list(&self) -> Result<Vec<ExperienceRecord>, ExperienceQueryError> {
        Ok(self.experiences.clone())
    }
}

#[async_trait]
impl ProjectQuery for InMemoryContent {
    async fn list(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError> {
        Ok(self.projects.clone())
    }
}
