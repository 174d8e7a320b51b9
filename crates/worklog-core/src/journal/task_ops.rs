//! Task tree edits applied through stored reports.
//!
//! Tasks have no table of their own; they live inside the serialized task
//! tree of their report. Every operation here loads the document, mutates
//! the tree in memory and writes the whole document back under the same
//! date key.

use super::Journal;
use crate::{
    error::{ReportError, Result},
    models::{ReportDocument, Task},
    params::{parse_date_field, TaskCreate, TaskRemove},
};

impl Journal {
    /// Adds a task to the report stored under `params.date`.
    ///
    /// The task is appended to the top level, or to the subtask list of the
    /// task named by `parent`. Sibling ids are assigned as max + 1, so ids
    /// stay stable while earlier siblings are removed. Returns the new
    /// task's local id together with the updated document.
    pub async fn add_task(&self, params: &TaskCreate) -> Result<(u64, ReportDocument)> {
        let (date, status) = params.validate()?;
        let params = params.clone();

        self.with_db(move |mut db| {
            let mut doc = db
                .get_report(date)?
                .ok_or(ReportError::ReportNotFound { date })?;

            let task = Task {
                task_id: params.task_id,
                hours: params.hours,
                minutes: params.minutes,
                status,
                ..Task::new(0, params.title)
            };
            let id = doc.add_task(params.parent, task)?;

            db.update_report(date, &doc)?;
            Ok((id, doc))
        })
        .await
    }

    /// Removes a task from the report stored under `params.date`.
    ///
    /// Only the addressed sibling list is searched: the top level when
    /// `parent` is unset, otherwise the subtask list of the parent task.
    /// Returns the removed task together with the updated document.
    pub async fn remove_task(&self, params: &TaskRemove) -> Result<(Task, ReportDocument)> {
        let date = parse_date_field("date", &params.date)?;
        let parent = params.parent;
        let id = params.id;

        self.with_db(move |mut db| {
            let mut doc = db
                .get_report(date)?
                .ok_or(ReportError::ReportNotFound { date })?;

            let removed = doc.remove_task(parent, id)?;

            db.update_report(date, &doc)?;
            Ok((removed, doc))
        })
        .await
    }
}
