//! Read-only persistence for the race and sports catalogs.
//!
//! [`traits`] defines one repository per entity; [`sqlite`] implements them
//! on top of a `sqlx::SqlitePool`. Each repository owns an [`InitLatch`] that
//! creates its table and seeds it exactly once.

mod init;
pub mod sqlite;
pub mod traits;

pub use init::InitLatch;
#[cfg(test)]
pub use init::InitState;
pub use traits::{RaceRepository, SportEventRepository};

/// Errors from the persistence layer.
///
/// A by-id lookup that matches nothing is not an error; repositories return
/// `Ok(None)` for it.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Schema creation or seeding failed. Latched: every later call sees it.
    #[error("Initialization failed: {0}")]
    Initialization(String),
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
    /// A row did not have the shape of the record it was decoded into.
    #[error("Row mapping failed: {0}")]
    Mapping(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => PersistenceError::Mapping(err.to_string()),
            other => PersistenceError::Query(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_errors_classify_as_mapping() {
        let err = PersistenceError::from(sqlx::Error::ColumnNotFound("sport".to_string()));
        assert!(matches!(err, PersistenceError::Mapping(_)));

        let err = PersistenceError::from(sqlx::Error::ColumnIndexOutOfBounds { index: 6, len: 5 });
        assert!(matches!(err, PersistenceError::Mapping(_)));
    }

    #[test]
    fn test_other_errors_classify_as_query() {
        let err = PersistenceError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, PersistenceError::Query(_)));
    }
}
