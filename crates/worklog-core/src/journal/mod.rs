//! High-level journal API for managing daily work reports.
//!
//! [`Journal`] is the coordinator between the application surfaces (CLI,
//! MCP) and the SQLite store. The ops submodules hold the report, task and
//! preference logic; the handler submodules wrap those results in the
//! display types the surfaces print.
//!
//! The journal itself holds only the database path. Every operation opens
//! its own connection inside a blocking task, so the async surface never
//! blocks the runtime and operations stay independent of each other.
//!
//! # Usage
//!
//! ```rust
//! use worklog_core::{JournalBuilder, params::CreateReport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let journal = JournalBuilder::new()
//!     .with_database_path(Some("/tmp/worklog.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreateReport {
//!     date: Some("2024-03-01".to_string()),
//!     name: Some("Sam".to_string()),
//!     projects: vec!["Rukkor".to_string()],
//!     ..Default::default()
//! };
//! let report = journal.create_report(&params).await?;
//! let summaries = journal.list_reports_summary().await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::db::Database;
use crate::error::{ReportError, Result};

pub mod builder;
pub mod report_handlers;
pub mod report_ops;
pub mod settings_ops;
pub mod task_handlers;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::JournalBuilder;

/// Main journal interface for managing daily reports.
pub struct Journal {
    pub(crate) db_path: PathBuf,
}

impl Journal {
    /// Creates a new journal with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Opens the database on the blocking pool and runs `op` against it.
    ///
    /// Connections are cheap to open, so every operation gets a fresh one
    /// scoped to its own blocking task.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || op(Database::new(&db_path)?))
            .await
            .map_err(|e| ReportError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
