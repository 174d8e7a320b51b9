//! Report CRUD operations and queries.

use jiff::Timestamp;
use jiff::civil::Date;
use rusqlite::{OptionalExtension, params};

use crate::{
    error::{SqliteResultExt, ReportError, Result},
    models::{BulletStyle, GapSettings, ReportDocument, ReportSummary, Task},
};

// SQL queries as const strings, shared across operations
const INSERT_REPORT_SQL: &str = "INSERT INTO reports (date, name, projects, next_task, bullet_type, sub_icon, task_gap, subtask_gap, tasks, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const UPDATE_REPORT_SQL: &str = "UPDATE reports SET name = ?2, projects = ?3, next_task = ?4, bullet_type = ?5, sub_icon = ?6, task_gap = ?7, subtask_gap = ?8, tasks = ?9, updated_at = ?10 WHERE date = ?1";
const SELECT_REPORT_SQL: &str = "SELECT date, name, projects, next_task, bullet_type, sub_icon, task_gap, subtask_gap, tasks, created_at, updated_at FROM reports WHERE date = ?1";
const LIST_REPORTS_SQL: &str = "SELECT date, name, projects, next_task, bullet_type, sub_icon, task_gap, subtask_gap, tasks, created_at, updated_at FROM reports ORDER BY rowid";
const SELECT_RANGE_SQL: &str = "SELECT date, name, projects, next_task, bullet_type, sub_icon, task_gap, subtask_gap, tasks, created_at, updated_at FROM reports WHERE date >= ?1 AND date <= ?2 ORDER BY rowid";
const CHECK_REPORT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM reports WHERE date = ?1)";
const SELECT_CREATED_AT_SQL: &str = "SELECT created_at FROM reports WHERE date = ?1";
const DELETE_REPORT_SQL: &str = "DELETE FROM reports WHERE date = ?1";

impl super::Database {
    /// Helper function to construct a report document from a database row.
    ///
    /// Returns `Ok(None)` when the row exists but its payload no longer
    /// deserializes (hand-edited database, downgraded schema); such rows are
    /// treated as absent by every caller. Genuine SQL errors still propagate.
    fn document_from_row(
        row: &rusqlite::Row,
    ) -> rusqlite::Result<Option<(ReportDocument, Timestamp, Timestamp)>> {
        let Ok(date) = row.get::<_, String>(0)?.parse::<Date>() else {
            return Ok(None);
        };
        let Ok(projects) = serde_json::from_str::<Vec<String>>(&row.get::<_, String>(2)?) else {
            return Ok(None);
        };
        let Ok(tasks) = serde_json::from_str::<Vec<Task>>(&row.get::<_, String>(8)?) else {
            return Ok(None);
        };
        let Ok(task_gap) = u32::try_from(row.get::<_, i64>(6)?) else {
            return Ok(None);
        };
        let Ok(subtask_gap) = u32::try_from(row.get::<_, i64>(7)?) else {
            return Ok(None);
        };
        let Ok(created_at) = row.get::<_, String>(9)?.parse::<Timestamp>() else {
            return Ok(None);
        };
        let Ok(updated_at) = row.get::<_, String>(10)?.parse::<Timestamp>() else {
            return Ok(None);
        };

        let document = ReportDocument {
            date,
            tasks,
            projects,
            name: row.get(1)?,
            next_task: row.get(3)?,
            bullet: BulletStyle::from(row.get::<_, String>(4)?),
            sub_icon: BulletStyle::from(row.get::<_, String>(5)?),
            gaps: GapSettings {
                task_gap,
                subtask_gap,
            },
        };

        Ok(Some((document, created_at, updated_at)))
    }

    /// Persist a new report document under its date key.
    ///
    /// Fails with [`ReportError::DuplicateDate`] when a report already
    /// exists for that date, unless `overwrite` is set, in which case the
    /// existing row is replaced in place, keeping its creation timestamp and
    /// its position in insertion order.
    pub fn save_report(&mut self, document: &ReportDocument, overwrite: bool) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .sql_context("Failed to begin transaction")?;

        let date_key = document.date.to_string();
        let exists: bool = tx
            .query_row(CHECK_REPORT_EXISTS_SQL, params![date_key], |row| row.get(0))
            .sql_context("Failed to check report existence")?;

        if exists && !overwrite {
            return Err(ReportError::DuplicateDate {
                date: document.date,
            });
        }

        let now = Timestamp::now().to_string();
        let projects = serde_json::to_string(&document.projects)?;
        let tasks = serde_json::to_string(&document.tasks)?;

        if exists {
            tx.execute(
                UPDATE_REPORT_SQL,
                params![
                    date_key,
                    document.name,
                    projects,
                    document.next_task,
                    document.bullet.tag(),
                    document.sub_icon.tag(),
                    document.gaps.task_gap as i64,
                    document.gaps.subtask_gap as i64,
                    tasks,
                    now,
                ],
            )
            .sql_context("Failed to overwrite report")?;
        } else {
            tx.execute(
                INSERT_REPORT_SQL,
                params![
                    date_key,
                    document.name,
                    projects,
                    document.next_task,
                    document.bullet.tag(),
                    document.sub_icon.tag(),
                    document.gaps.task_gap as i64,
                    document.gaps.subtask_gap as i64,
                    tasks,
                    now,
                    now,
                ],
            )
            .sql_context("Failed to insert report")?;
        }

        tx.commit().sql_context("Failed to commit transaction")
    }

    /// Retrieves the report stored under the given date.
    ///
    /// Rows whose payload no longer deserializes are treated as absent.
    pub fn get_report(&self, date: Date) -> Result<Option<ReportDocument>> {
        let row = self
            .conn
            .query_row(
                SELECT_REPORT_SQL,
                params![date.to_string()],
                Self::document_from_row,
            )
            .optional()
            .sql_context("Failed to query report")?;

        Ok(row.flatten().map(|(document, _, _)| document))
    }

    /// Replace the report previously stored under `old_date` with
    /// `document`.
    ///
    /// When the document's date differs from `old_date` the report moves to
    /// the new key: the old row is deleted and a fresh one inserted in the
    /// same transaction, keeping the original creation timestamp. Moving
    /// onto a date that already has a report fails with
    /// [`ReportError::DuplicateDate`] and leaves both rows untouched.
    pub fn update_report(&mut self, old_date: Date, document: &ReportDocument) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .sql_context("Failed to begin transaction")?;

        let old_key = old_date.to_string();
        let now = Timestamp::now().to_string();
        let projects = serde_json::to_string(&document.projects)?;
        let tasks = serde_json::to_string(&document.tasks)?;

        if document.date == old_date {
            let rows = tx
                .execute(
                    UPDATE_REPORT_SQL,
                    params![
                        old_key,
                        document.name,
                        projects,
                        document.next_task,
                        document.bullet.tag(),
                        document.sub_icon.tag(),
                        document.gaps.task_gap as i64,
                        document.gaps.subtask_gap as i64,
                        tasks,
                        now,
                    ],
                )
                .sql_context("Failed to update report")?;

            if rows == 0 {
                return Err(ReportError::ReportNotFound { date: old_date });
            }
        } else {
            let new_key = document.date.to_string();
            let taken: bool = tx
                .query_row(CHECK_REPORT_EXISTS_SQL, params![new_key], |row| row.get(0))
                .sql_context("Failed to check report existence")?;

            if taken {
                return Err(ReportError::DuplicateDate {
                    date: document.date,
                });
            }

            let created_at: Option<String> = tx
                .query_row(SELECT_CREATED_AT_SQL, params![old_key], |row| row.get(0))
                .optional()
                .sql_context("Failed to read report timestamps")?;
            let Some(created_at) = created_at else {
                return Err(ReportError::ReportNotFound { date: old_date });
            };

            tx.execute(DELETE_REPORT_SQL, params![old_key])
                .sql_context("Failed to remove old report key")?;
            tx.execute(
                INSERT_REPORT_SQL,
                params![
                    new_key,
                    document.name,
                    projects,
                    document.next_task,
                    document.bullet.tag(),
                    document.sub_icon.tag(),
                    document.gaps.task_gap as i64,
                    document.gaps.subtask_gap as i64,
                    tasks,
                    created_at,
                    now,
                ],
            )
            .sql_context("Failed to insert moved report")?;
        }

        tx.commit().sql_context("Failed to commit transaction")
    }

    /// Delete the report stored under the given date and return its
    /// document.
    pub fn delete_report(&mut self, date: Date) -> Result<ReportDocument> {
        let tx = self
            .conn
            .transaction()
            .sql_context("Failed to begin transaction")?;

        let document = tx
            .query_row(
                SELECT_REPORT_SQL,
                params![date.to_string()],
                Self::document_from_row,
            )
            .optional()
            .sql_context("Failed to query report")?
            .flatten()
            .map(|(document, _, _)| document)
            .ok_or(ReportError::ReportNotFound { date })?;

        tx.execute(DELETE_REPORT_SQL, params![date.to_string()])
            .sql_context("Failed to delete report")?;

        tx.commit().sql_context("Failed to commit transaction")?;

        Ok(document)
    }

    /// List all stored reports as summaries, in insertion order.
    ///
    /// Insertion order is the order reports were first saved; editing a
    /// report in place keeps its position. Corrupt rows are skipped rather
    /// than failing the whole listing.
    pub fn list_summaries(&self) -> Result<Vec<ReportSummary>> {
        let mut stmt = self
            .conn
            .prepare(LIST_REPORTS_SQL)
            .sql_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::document_from_row)
            .sql_context("Failed to query reports")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .sql_context("Failed to fetch reports")?;

        Ok(rows
            .into_iter()
            .flatten()
            .map(|(document, created_at, updated_at)| {
                ReportSummary::from_document(&document, created_at, updated_at)
            })
            .collect())
    }

    /// Reports whose date falls inside the inclusive range, in insertion
    /// order.
    ///
    /// An inverted range (start after end) selects nothing.
    pub fn reports_in_range(&self, start: Date, end: Date) -> Result<Vec<ReportDocument>> {
        let mut stmt = self
            .conn
            .prepare(SELECT_RANGE_SQL)
            .sql_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(
                params![start.to_string(), end.to_string()],
                Self::document_from_row,
            )
            .sql_context("Failed to query reports")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .sql_context("Failed to fetch reports")?;

        Ok(rows
            .into_iter()
            .flatten()
            .map(|(document, _, _)| document)
            .collect())
    }
}
