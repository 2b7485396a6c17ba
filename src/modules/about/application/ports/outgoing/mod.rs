mod about_query;
mod about_repository;

pub use about_query::{AboutQuery, AboutQueryError};
pub use about_repository::{AboutFields, AboutRepository, AboutRepositoryError};
