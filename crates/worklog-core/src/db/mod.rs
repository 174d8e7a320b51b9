//! SQLite storage for reports and preferences.
//!
//! Reports live one row per calendar date with the task tree serialized as
//! a JSON payload; preferences live in a single-row table. Connections are
//! cheap to open, so callers create a [`Database`] per operation and let it
//! drop with the scope.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, SqliteResultExt};

pub mod migrations;
pub mod report_queries;
pub mod settings_queries;

/// An open handle to the report store.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens the database file, creating it and its schema when missing.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).sql_context("Failed to open report database")?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }
}
