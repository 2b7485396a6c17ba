use serde::Deserialize;

use crate::modules::contact::application::ports::incoming::use_cases::ContactCommand;
use crate::shared::api::AppError;

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactRequest {
    pub fn into_command(self) -> Result<ContactCommand, AppError> {
        ContactCommand::new(self.name, self.email, self.message)
            .map_err(|err| AppError::MissingFields(err.to_string()))
    }
}
