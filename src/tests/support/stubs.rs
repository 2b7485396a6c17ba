use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::about::application::domain::entities::{AboutContent, AboutRecord};
use crate::about::application::ports::incoming::use_cases::{
    AboutCommand, CreateAboutError, CreateAboutUseCase, DeleteAboutError, DeleteAboutUseCase,
    GetAboutError, GetAboutUseCase, UpdateAboutError, UpdateAboutUseCase,
};
use crate::contact::application::domain::entities::{ContactReceipt, MessageInbox};
use crate::contact::application::ports::incoming::use_cases::{
    ContactCommand, ListMessagesError, ListMessagesUseCase, SubmitContactError,
    SubmitContactUseCase,
};
use crate::experience::application::domain::entities::ExperienceOverview;
use crate::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase,
};
use crate::project::application::domain::entities::ProjectsOverview;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::shared::content::Resolved;
use crate::shared::datastore::DatastoreProbe;
use crate::skill::application::domain::entities::SkillsOverview;
use crate::skill::application::ports::incoming::use_cases::{GetSkillsError, GetSkillsUseCase};

// ============================================================
// Datastore probe
// ============================================================

#[derive(Debug, Clone, Copy)]
pub struct StubDatastoreProbe {
    available: bool,
}

impl StubDatastoreProbe {
    pub fn online() -> Self {
        Self { available: true }
    }

    pub fn offline() -> Self {
        Self { available: false }
    }
}

#[async_trait]
impl DatastoreProbe for StubDatastoreProbe {
    async fn is_available(&self) -> bool {
        self.available
    }
}

/// Default for every use case a test does not configure.
pub struct UnusedUseCase;

#[async_trait]
impl GetAboutUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Resolved<AboutContent>, GetAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl CreateAboutUseCase for UnusedUseCase {
    async fn execute(&self, _command: AboutCommand) -> Result<AboutRecord, CreateAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateAboutUseCase for UnusedUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _command: AboutCommand,
    ) -> Result<AboutRecord, UpdateAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteAboutUseCase for UnusedUseCase {
    async fn execute(&self, _id: Uuid) -> Result<AboutRecord, DeleteAboutError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetSkillsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Resolved<SkillsOverview>, GetSkillsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetExperienceUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Resolved<ExperienceOverview>, GetExperienceError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetProjectsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Resolved<ProjectsOverview>, GetProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SubmitContactUseCase for UnusedUseCase {
    async fn execute(&self, _command: ContactCommand) -> Result<ContactReceipt, SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListMessagesUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<MessageInbox, ListMessagesError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================
// About
// ============================================================

fn record_from(id: Uuid, command: &AboutCommand) -> AboutRecord {
    AboutRecord {
        id,
        name: command.name().to_string(),
        bio: command.bio().to_string(),
        photo: command.photo().to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub struct StubGetAboutUseCase {
    result: Result<Resolved<AboutContent>, GetAboutError>,
}

impl StubGetAboutUseCase {
    pub fn returning(resolved: Resolved<AboutContent>) -> Self {
        Self { result: Ok(resolved) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetAboutError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetAboutUseCase for StubGetAboutUseCase {
    async fn execute(&self) -> Result<Resolved<AboutContent>, GetAboutError> {
        self.result.clone()
    }
}

/// Echoes the command back as a stored record, or fails with the given error.
pub struct StubCreateAboutUseCase {
    error: Option<CreateAboutError>,
}

impl StubCreateAboutUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn failure(error: CreateAboutError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl CreateAboutUseCase for StubCreateAboutUseCase {
    async fn execute(&self, command: AboutCommand) -> Result<AboutRecord, CreateAboutError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(record_from(Uuid::new_v4(), &command)),
        }
    }
}

pub struct StubUpdateAboutUseCase {
    error: Option<UpdateAboutError>,
}

impl StubUpdateAboutUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn failure(error: UpdateAboutError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl UpdateAboutUseCase for StubUpdateAboutUseCase {
    async fn execute(
        &self,
        id: Uuid,
        command: AboutCommand,
    ) -> Result<AboutRecord, UpdateAboutError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(record_from(id, &command)),
        }
    }
}

pub struct StubDeleteAboutUseCase {
    error: Option<DeleteAboutError>,
}

impl StubDeleteAboutUseCase {
    pub fn echo() -> Self {
        Self { error: None }
    }

    pub fn failure(error: DeleteAboutError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl DeleteAboutUseCase for StubDeleteAboutUseCase {
    async fn execute(&self, id: Uuid) -> Result<AboutRecord, DeleteAboutError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(AboutRecord {
                id,
                name: "Deleted".to_string(),
                bio: "Removed entry".to_string(),
                photo: "deleted.png".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
        }
    }
}

// ============================================================
// Read-only content
// ============================================================

pub struct StubGetSkillsUseCase {
    result: Result<Resolved<SkillsOverview>, GetSkillsError>,
}

impl StubGetSkillsUseCase {
    pub fn returning(resolved: Resolved<SkillsOverview>) -> Self {
        Self { result: Ok(resolved) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSkillsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSkillsUseCase for StubGetSkillsUseCase {
    async fn execute(&self) -> Result<Resolved<SkillsOverview>, GetSkillsError> {
        self.result.clone()
    }
}

pub struct StubGetExperienceUseCase {
    result: Result<Resolved<ExperienceOverview>, GetExperienceError>,
}

impl StubGetExperienceUseCase {
    pub fn returning(resolved: Resolved<ExperienceOverview>) -> Self {
        Self { result: Ok(resolved) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetExperienceError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self) -> Result<Resolved<ExperienceOverview>, GetExperienceError> {
        self.result.clone()
    }
}

pub struct StubGetProjectsUseCase {
    result: Result<Resolved<ProjectsOverview>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn returning(resolved: Resolved<ProjectsOverview>) -> Self {
        Self { result: Ok(resolved) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetProjectsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Resolved<ProjectsOverview>, GetProjectsError> {
        self.result.clone()
    }
}

// ============================================================
// Contact
// ============================================================

pub struct StubSubmitContactUseCase {
    result: Result<ContactReceipt, SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn returning(receipt: ContactReceipt) -> Self {
        Self { result: Ok(receipt) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(SubmitContactError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, _command: ContactCommand) -> Result<ContactReceipt, SubmitContactError> {
        self.result.clone()
    }
}

pub struct StubListMessagesUseCase {
    result: Result<MessageInbox, ListMessagesError>,
}

impl StubListMessagesUseCase {
    pub fn returning(inbox: MessageInbox) -> Self {
        Self { result: Ok(inbox) }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListMessagesError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self) -> Result<MessageInbox, ListMessagesError> {
        self.result.clone()
    }
}
