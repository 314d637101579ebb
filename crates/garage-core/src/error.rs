//! Error types for the garage library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all garage operations.
#[derive(Error, Debug)]
pub enum GarageError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Garage not found for the given ID
    #[error("Garage with ID {id} not found")]
    GarageNotFound { id: u64 },
    /// Car not found for the given ID
    #[error("Car with ID {id} not found")]
    CarNotFound { id: u64 },
    /// Maintenance record not found for the given ID
    #[error("Maintenance with ID {id} not found")]
    MaintenanceNotFound { id: u64 },
    /// A date or month string could not be parsed
    #[error("Invalid format for '{field}': '{value}' (expected {expected})")]
    InvalidFormat {
        field: String,
        value: String,
        expected: &'static str,
    },
    /// A report range whose start lies after its end
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GarageError {
        GarageError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GarageError {
        GarageError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GarageError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid format error for a field holding `value`.
    pub fn invalid_format(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// Creates an invalid range error from the two offending boundaries.
    pub fn invalid_range(start: impl ToString, end: impl ToString) -> Self {
        Self::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Returns true for errors that name a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GarageNotFound { .. } | Self::CarNotFound { .. } | Self::MaintenanceNotFound { .. }
        )
    }

    /// Returns true for errors caused by the request itself rather than the
    /// service. Not-found errors count as client errors.
    pub fn is_client_error(&self) -> bool {
        self.is_not_found()
            || matches!(
                self,
                Self::InvalidFormat { .. } | Self::InvalidRange { .. } | Self::InvalidInput { .. }
            )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GarageError::database(message).with_source(e))
    }
}

/// Result type alias for garage operations
pub type Result<T> = std::result::Result<T, GarageError>;
