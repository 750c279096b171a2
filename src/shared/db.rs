use sea_orm::{DbErr, SqlErr};

/// True when the error comes from a unique index, including the partial
/// indexes that keep singleton tables to one active row.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
