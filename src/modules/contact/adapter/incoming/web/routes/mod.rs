mod contact_request;
mod list_messages;
mod submit_contact;

pub use contact_request::ContactRequest;
pub use list_messages::list_messages_handler;
pub use submit_contact::submit_contact_handler;
