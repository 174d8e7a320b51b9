//! Builder for configuring journal instances.

use std::path::{Path, PathBuf};

use super::Journal;
use crate::error::{ReportError, Result};

/// Configures and creates [`Journal`] instances.
///
/// Without a custom path the database lands in the XDG data directory,
/// `$XDG_DATA_HOME/worklog/worklog.db` on most systems.
///
/// # Examples
///
/// ```rust,no_run
/// use worklog_core::JournalBuilder;
///
/// # async {
/// let journal = JournalBuilder::new()
///     .with_database_path(Some("/tmp/worklog.db"))
///     .build()
///     .await?;
/// # Result::<(), worklog_core::ReportError>::Ok(())
/// # };
/// ```
#[derive(Debug, Clone, Default)]
pub struct JournalBuilder {
    database_path: Option<PathBuf>,
}

impl JournalBuilder {
    /// Starts a builder that uses the default database location.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the database file location. `None` keeps the default, so
    /// an optional CLI flag can be passed straight through.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the database location and opens it once, creating missing
    /// directories and the schema on the way.
    pub async fn build(self) -> Result<Journal> {
        let db_path = self.database_path.map_or_else(default_database_path, Ok)?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ReportError::FileSystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // Schema problems should surface at startup, not on first use.
        let journal = Journal::new(db_path);
        journal.with_db(|_db| Ok(())).await?;
        Ok(journal)
    }
}

/// XDG data file for the report store, created on demand.
fn default_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix("worklog")
        .place_data_file("worklog.db")
        .map_err(|e| ReportError::XdgDirectory(e.to_string()))
}
