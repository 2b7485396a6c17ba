mod about_command;
mod create_about;
mod delete_about;
mod get_about;
mod update_about;

pub use about_command::{AboutCommand, AboutCommandError};
pub use create_about::{CreateAboutError, CreateAboutUseCase};
pub use delete_about::{DeleteAboutError, DeleteAboutUseCase};
pub use get_about::{GetAboutError, GetAboutUseCase};
pub use update_about::{UpdateAboutError, UpdateAboutUseCase};
