use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::incoming::use_cases::{
    CreateAboutUseCase, DeleteAboutUseCase, GetAboutUseCase, UpdateAboutUseCase,
};
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitContactUseCase,
};
use crate::experience::application::ports::incoming::use_cases::GetExperienceUseCase;
use crate::project::application::ports::incoming::use_cases::GetProjectsUseCase;
use crate::shared::datastore::DatastoreProbe;
use crate::skill::application::ports::incoming::use_cases::GetSkillsUseCase;
use crate::tests::support::stubs::{StubDatastoreProbe, UnusedUseCase};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every use case panics unless a test swaps it in.
pub struct TestAppStateBuilder {
    get_about: Arc<dyn GetAboutUseCase + Send + Sync>,
    create_about: Arc<dyn CreateAboutUseCase + Send + Sync>,
    update_about: Arc<dyn UpdateAboutUseCase + Send + Sync>,
    delete_about: Arc<dyn DeleteAboutUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    get_experience: Arc<dyn GetExperienceUseCase + Send + Sync>,
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    list_messages: Arc<dyn ListMessagesUseCase + Send + Sync>,
    probe: Arc<dyn DatastoreProbe>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_about: Arc::new(UnusedUseCase),
            create_about: Arc::new(UnusedUseCase),
            update_about: Arc::new(UnusedUseCase),
            delete_about: Arc::new(UnusedUseCase),
            get_skills: Arc::new(UnusedUseCase),
            get_experience: Arc::new(UnusedUseCase),
            get_projects: Arc::new(UnusedUseCase),
            submit_contact: Arc::new(UnusedUseCase),
            list_messages: Arc::new(UnusedUseCase),
            probe: Arc::new(StubDatastoreProbe::online()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.get_about = Arc::new(uc);
        self
    }

    pub fn with_create_about(
        mut self,
        uc: impl CreateAboutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_about = Arc::new(uc);
        self
    }

    pub fn with_update_about(
        mut self,
        uc: impl UpdateAboutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_about = Arc::new(uc);
        self
    }

    pub fn with_delete_about(
        mut self,
        uc: impl DeleteAboutUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_about = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + Send + Sync + 'static) -> Self {
        self.get_skills = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_experience = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_projects = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_messages = Arc::new(uc);
        self
    }

    pub fn with_probe(mut self, probe: impl DatastoreProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            about: AboutUseCases {
                get: self.get_about,
                create: self.create_about,
                update: self.update_about,
                delete: self.delete_about,
            },
            get_skills_use_case: self.get_skills,
            get_experience_use_case: self.get_experience,
            get_projects_use_case: self.get_projects,
            contact: ContactUseCases {
                submit: self.submit_contact,
                list: self.list_messages,
            },
            datastore_probe: self.probe,
        })
    }
}
