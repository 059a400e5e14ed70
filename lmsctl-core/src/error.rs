//! Structured error types for lmsctl-core.
//!
//! Uses `thiserror` for a composable API surface. The binary crate
//! (lmsctl-cli) wraps these in `anyhow` for reporting.
//!
//! Not-found is deliberately absent from this taxonomy: `get` returns an
//! `Option` and `update`/`delete` return `bool`, so an expected zero-result
//! outcome never travels as an error.

use std::fmt;

use thiserror::Error;

/// Main error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The connection could not be established or was lost mid-flight.
    #[error("database connection failed: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// A write was rejected by a foreign-key or uniqueness constraint.
    #[error("{kind} violation: {detail}")]
    Integrity { kind: IntegrityKind, detail: String },

    /// Any other store-level failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Which constraint class rejected the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityKind {
    ForeignKey,
    Unique,
}

impl fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityKind::ForeignKey => f.write_str("foreign key"),
            IntegrityKind::Unique => f.write_str("unique"),
        }
    }
}

/// Result type alias for lmsctl-core operations.
pub type Result<T> = std::result::Result<T, StoreError>;

// Postgres SQLSTATE codes for constraint violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => match db.code().as_deref() {
                Some(FOREIGN_KEY_VIOLATION) => StoreError::Integrity {
                    kind: IntegrityKind::ForeignKey,
                    detail: db.message().to_owned(),
                },
                Some(UNIQUE_VIOLATION) => StoreError::Integrity {
                    kind: IntegrityKind::Unique,
                    detail: db.message().to_owned(),
                },
                _ => StoreError::Database(sqlx::Error::Database(db)),
            },
            err @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed) => StoreError::Connectivity(err),
            err => StoreError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_errors_classify_as_connectivity() {
        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Connectivity(_)));
    }

    #[test]
    fn other_errors_classify_as_database() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn integrity_display_names_the_constraint() {
        let err = StoreError::Integrity {
            kind: IntegrityKind::ForeignKey,
            detail: "insert or update violates foreign key".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "foreign key violation: insert or update violates foreign key"
        );
    }
}
