//! Task handler operations that return formatted wrapper types for the
//! Journal.

use super::Journal;
use crate::{
    error::Result,
    models::{ReportDocument, Task},
    params::{TaskCreate, TaskRemove},
};

impl Journal {
    /// Handle adding a task to a stored report.
    ///
    /// Creates a new task with the specified parameters, appends it to the
    /// report's task tree and saves the report. The status string is
    /// validated before anything is loaded.
    ///
    /// # Arguments
    ///
    /// * `params` - Task creation parameters
    ///
    /// # Returns
    ///
    /// The new task's local id together with the updated report
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{params::TaskCreate, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = TaskCreate {
    ///     date: "2024-03-01".to_string(),
    ///     title: "Fix login bug".to_string(),
    ///     task_id: Some("T1".to_string()),
    ///     hours: 1,
    ///     minutes: 30,
    ///     status: Some("done".to_string()),
    ///     ..Default::default()
    /// };
    /// let (id, report) = journal.add_task_to_report(&params).await?;
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn add_task_to_report(&self, params: &TaskCreate) -> Result<(u64, ReportDocument)> {
        self.add_task(params).await
    }

    /// Handle removing a task from a stored report.
    ///
    /// Removes the addressed task from the report's task tree, including
    /// any subtasks it carries, and saves the report. Uses the
    /// remove-before-save pattern to return the removed task for
    /// confirmation output.
    ///
    /// # Arguments
    ///
    /// * `params` - Task removal parameters containing the date key, the
    ///   optional parent id and the task id
    ///
    /// # Returns
    ///
    /// The removed task together with the updated report
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{params::TaskRemove, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = TaskRemove {
    ///     date: "2024-03-01".to_string(),
    ///     parent: None,
    ///     id: 2,
    /// };
    /// let (removed, report) = journal.remove_task_from_report(&params).await?;
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn remove_task_from_report(
        &self,
        params: &TaskRemove,
    ) -> Result<(Task, ReportDocument)> {
        self.remove_task(params).await
    }
}
