use sea_orm::{DbErr, SqlErr};

pub fn is_duplicate_key(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = err.to_string();
    msg.contains("duplicate key") || msg.contains("23505")
}

/// Best-effort name of the column behind a unique violation.
///
/// Postgres reports `Key (email)=(...) already exists`; failing that the
/// constraint name is used, and `record` as a last resort.
pub fn duplicate_key_field(err: &DbErr) -> String {
    let msg = err.to_string();

    if let Some(start) = msg.find("Key (") {
        let rest = &msg[start + 5..];
        if let Some(end) = rest.find(')') {
            return rest[..end].to_string();
        }
    }

    if let Some(start) = msg.find("constraint \"") {
        let rest = &msg[start + 12..];
        if let Some(end) = rest.find('"') {
            return rest[..end].to_string();
        }
    }

    "record".to_string()
}
