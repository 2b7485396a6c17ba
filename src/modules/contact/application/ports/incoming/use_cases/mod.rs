mod contact_command;
mod list_messages;
mod submit_contact;

pub use contact_command::{ContactCommand, ContactCommandError};
pub use list_messages::{ListMessagesError, ListMessagesUseCase};
pub use submit_contact::{SubmitContactError, SubmitContactUseCase};
