use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Classify a store error; constraint violations become domain errors
    /// carrying `conflict` as their message.
    pub fn from_db(err: DbErr, conflict: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(conflict()),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => Self::Validation(detail),
            _ => Self::Db(err.to_string()),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        Self::from_db(err, || "unique constraint violated".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_formats_entity() {
        let e = ServiceError::not_found("seller 3");
        assert_eq!(e.to_string(), "not found: seller 3 not found");
    }

    #[test]
    fn plain_db_errors_stay_faults() {
        let e = ServiceError::from(DbErr::Custom("connection reset".into()));
        assert!(matches!(e, ServiceError::Db(ref m) if m.contains("connection reset")));
    }
}
