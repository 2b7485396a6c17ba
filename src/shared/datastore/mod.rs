mod connection;
mod db_error;
mod json_column;
mod probe;
mod probe_postgres;

pub use connection::connect;
pub use db_error::{duplicate_key_field, is_duplicate_key};
pub use json_column::{from_json, to_json};
pub use probe::DatastoreProbe;
pub use probe_postgres::PostgresProbe;
