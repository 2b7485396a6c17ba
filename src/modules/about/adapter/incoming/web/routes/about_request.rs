use serde::Deserialize;

use crate::modules::about::application::ports::incoming::use_cases::{
    AboutCommand, AboutCommandError,
};
use crate::shared::api::AppError;

/// Body of `POST /api/about` and `PUT /api/about/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct AboutRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

impl AboutRequest {
    pub fn into_command(self) -> Result<AboutCommand, AppError> {
        AboutCommand::new(self.name, self.bio, self.photo).map_err(|err| match err {
            AboutCommandError::MissingFields => AppError::MissingFields(err.to_string()),
            AboutCommandError::Invalid(errors) => AppError::Validation(errors),
        })
    }
}
