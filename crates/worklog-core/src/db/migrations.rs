//! Schema creation and column migrations.

use crate::error::{Result, SqliteResultExt};

impl super::Database {
    /// Creates missing tables and brings older databases up to date.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(include_str!("../../assets/schema.sql"))
            .sql_context("Failed to initialize database schema")?;

        // Databases created before the footer feature lack the next_task
        // column; CREATE TABLE IF NOT EXISTS will not add it.
        if !self.column_exists("reports", "next_task")? {
            self.conn
                .execute("ALTER TABLE reports ADD COLUMN next_task TEXT", [])
                .sql_context("Failed to add next_task column to reports table")?;
        }

        Ok(())
    }

    fn column_exists(&self, table: &str, column: &str) -> Result<bool> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                rusqlite::params![table, column],
                |row| row.get(0),
            )
            .sql_context("Failed to inspect table columns")?;
        Ok(count > 0)
    }
}
