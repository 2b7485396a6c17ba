mod about_query_postgres;
mod about_repository_postgres;
pub mod sea_orm_entity;

pub use about_query_postgres::AboutQueryPostgres;
pub use about_repository_postgres::AboutRepositoryPostgres;
