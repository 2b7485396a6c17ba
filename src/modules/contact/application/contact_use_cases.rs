use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub list: Arc<dyn ListMessagesUseCase + Send + Sync>,
}
