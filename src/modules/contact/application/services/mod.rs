mod list_messages_service;
mod submit_contact_service;

pub use list_messages_service::ListMessagesService;
pub use submit_contact_service::SubmitContactService;
