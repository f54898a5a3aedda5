use sea_orm::{DbErr, SqlErr};

/// Classification helpers for SeaORM errors.
pub trait DbErrExt {
    /// True when the statement failed on a UNIQUE constraint.
    fn is_unique_violation(&self) -> bool;
}

impl DbErrExt for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}
