mod message_query;
mod message_repository;

pub use message_query::{MessageQuery, MessageQueryError};
pub use message_repository::{MessageRepository, MessageRepositoryError};
