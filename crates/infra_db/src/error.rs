//! Database and assembly error types
//!
//! Two failure families live here: [`DatabaseError`] for anything the
//! connection pool or a query can do wrong, and [`AssemblyError`] for a row
//! that cannot be turned into a document. Keeping them apart lets callers
//! retry transport failures without retrying hopeless rows.

use thiserror::Error;

use core_kernel::FormatError;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Row not found in database
    #[error("record not found: {0}")]
    NotFound(String),

    /// Pool exhaustion, no available connections
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("sql error: {0}")]
    Sql(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not-found error for a specific entity type and business key.
    pub fn not_found(entity: &str, key: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{entity} with key '{key}' not found"))
    }

    /// Checks if this error indicates a record was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
            || matches!(self, DatabaseError::Sql(sqlx::Error::RowNotFound))
    }

    /// Checks if this error is a connection-related issue.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Errors raised while assembling relational rows into a document.
///
/// Every variant names the place the bad value came from: a temporal
/// failure carries the dotted field path, a relation failure carries the
/// JSON column name.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A temporal value failed the wire codec
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A JSON relation column did not parse into its sub-document
    #[error("relation column `{column}` did not parse: {source}")]
    Relation {
        column: &'static str,
        source: serde_json::Error,
    },
}

impl AssemblyError {
    /// Attaches the originating column name to a JSON parse failure.
    pub fn relation(column: &'static str, source: serde_json::Error) -> Self {
        AssemblyError::Relation { column, source }
    }
}

/// Errors from the combined fetch-and-assemble read path.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}
