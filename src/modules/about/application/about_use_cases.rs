use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    CreateAboutUseCase, DeleteAboutUseCase, GetAboutUseCase, UpdateAboutUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get: Arc<dyn GetAboutUseCase + Send + Sync>,
    pub create: Arc<dyn CreateAboutUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateAboutUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteAboutUseCase + Send + Sync>,
}
