//! Error types for the worklog library.

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

/// Everything that can go wrong while storing or rendering reports.
#[derive(Error, Debug)]
pub enum ReportError {
    /// SQLite failures, wrapped with the operation that hit them
    #[error("Storage error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No report stored under the given date key
    #[error("Report for {date} not found")]
    ReportNotFound { date: Date },
    /// A report already exists under the given date key
    #[error("A report for {date} already exists")]
    DuplicateDate { date: Date },
    /// Task not found within a report's task tree
    #[error("Task {id} not found in the report for {date}")]
    TaskNotFound { date: Date, id: u64 },
    /// I/O failures outside the database, typically directory creation
    #[error("Cannot access '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Default database location could not be resolved
    #[error("Cannot resolve the XDG data directory: {0}")]
    XdgDirectory(String),
    /// A parameter failed validation before reaching storage
    #[error("Invalid value for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// JSON round-trips of stored task trees
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Runtime wiring problems, such as a blocking task failing to join
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ReportError {
    /// Shorthand for a validation error naming the offending field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ReportError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Extension for rusqlite results, wrapping failures with the operation
/// being attempted.
pub trait SqliteResultExt<T> {
    fn sql_context(self, message: &str) -> Result<T>;
}

impl<T> SqliteResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn sql_context(self, message: &str) -> Result<T> {
        self.map_err(|source| ReportError::Database {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for worklog operations
pub type Result<T> = std::result::Result<T, ReportError>;
