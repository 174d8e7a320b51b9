//! Flattening stored reports into export row tuples.
//!
//! The exporter is the bridge between stored documents and table sinks
//! (terminal table, CSV file). It deliberately differs from the preview in
//! one way: durations come from the raw stored fields, never the derived
//! subtask sum, so the export shows what was entered.

use crate::models::{ReportDocument, Task};

/// One row of the tabular export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    /// Report date, populated only on the first row of each report
    pub date: String,
    /// Tracker reference, populated only on top-level task rows
    pub id: String,
    /// Trimmed task title
    pub title: String,
    /// Status label, empty when unset
    pub status: String,
    /// Raw duration as `{hours}h {minutes}m`
    pub duration: String,
}

/// Flatten reports into rows, one per task and one per subtask.
///
/// With `sort_chronologically` set (the export default) reports are ordered
/// by calendar date ascending regardless of store iteration order. Within a
/// report, subtask rows follow immediately after their parent row, before
/// the next top-level task; they leave the date and id columns blank to
/// signal visual grouping, as does every task row after the first of a
/// given date.
pub fn rows_from_reports(reports: &[ReportDocument], sort_chronologically: bool) -> Vec<ExportRow> {
    let mut ordered: Vec<&ReportDocument> = reports.iter().collect();
    if sort_chronologically {
        ordered.sort_by_key(|doc| doc.date);
    }

    let mut rows = Vec::new();
    for doc in ordered {
        let mut first = true;
        for task in &doc.tasks {
            let date = if first {
                doc.date.to_string()
            } else {
                String::new()
            };
            first = false;
            push_task_rows(&mut rows, task, date, true);
        }
    }
    rows
}

fn push_task_rows(rows: &mut Vec<ExportRow>, task: &Task, date: String, top_level: bool) {
    let id = if top_level {
        task.task_id.as_deref().unwrap_or("").trim().to_string()
    } else {
        String::new()
    };

    rows.push(ExportRow {
        date,
        id,
        title: task.title.trim().to_string(),
        status: task
            .status
            .map(|s| s.label().to_string())
            .unwrap_or_default(),
        duration: format!("{}h {}m", task.hours, task.minutes),
    });

    for sub in &task.subtasks {
        push_task_rows(rows, sub, String::new(), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn report(date: &str, tasks: Vec<Task>) -> ReportDocument {
        let mut doc = ReportDocument::new(date.parse().unwrap(), "Sam");
        doc.projects = vec!["Rukkor".to_string()];
        doc.tasks = tasks;
        doc
    }

    #[test]
    fn rows_sort_chronologically_and_group_by_date() {
        let reports = vec![
            report(
                "2024-01-15",
                vec![Task::new(1, "Later"), Task::new(2, "Later two")],
            ),
            report("2024-01-05", vec![Task::new(1, "Earlier")]),
        ];

        let rows = rows_from_reports(&reports, true);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, "2024-01-05");
        assert_eq!(rows[0].title, "Earlier");
        assert_eq!(rows[1].date, "2024-01-15");
        // Only the first row of a date carries it.
        assert_eq!(rows[2].date, "");
        assert_eq!(rows[2].title, "Later two");
    }

    #[test]
    fn unsorted_rows_keep_store_order() {
        let reports = vec![
            report("2024-01-15", vec![Task::new(1, "Later")]),
            report("2024-01-05", vec![Task::new(1, "Earlier")]),
        ];

        let rows = rows_from_reports(&reports, false);
        assert_eq!(rows[0].date, "2024-01-15");
        assert_eq!(rows[1].date, "2024-01-05");
    }

    #[test]
    fn subtask_rows_follow_parent_with_blank_grouping_cells() {
        let mut parent = Task {
            task_id: Some("T7".to_string()),
            ..Task::new(1, "Parent")
        };
        parent.subtasks = vec![Task {
            task_id: Some("T7.1".to_string()),
            minutes: 30,
            status: Some(TaskStatus::Completed),
            ..Task::new(1, "Child")
        }];
        let second = Task {
            task_id: Some("T8".to_string()),
            ..Task::new(2, "Second")
        };

        let rows = rows_from_reports(&[report("2024-02-01", vec![parent, second])], true);
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].id, "T7");
        assert_eq!(rows[0].date, "2024-02-01");

        // Subtask row: grouped under the parent, no date, no id even though
        // the subtask carries a tracker reference.
        assert_eq!(rows[1].title, "Child");
        assert_eq!(rows[1].date, "");
        assert_eq!(rows[1].id, "");
        assert_eq!(rows[1].status, "Completed");

        assert_eq!(rows[2].id, "T8");
        assert_eq!(rows[2].date, "");
    }

    #[test]
    fn durations_are_raw_and_never_normalized() {
        let mut parent = Task {
            hours: 9,
            minutes: 5,
            ..Task::new(1, "Parent")
        };
        parent.subtasks = vec![Task {
            minutes: 75,
            ..Task::new(1, "Child")
        }];

        let rows = rows_from_reports(&[report("2024-02-01", vec![parent])], true);
        // The preview would derive 1h 15min for the parent; the export shows
        // the stored fields as entered.
        assert_eq!(rows[0].duration, "9h 5m");
        assert_eq!(rows[1].duration, "0h 75m");
    }

    #[test]
    fn reports_without_tasks_produce_no_rows() {
        let rows = rows_from_reports(&[report("2024-02-01", vec![])], true);
        assert!(rows.is_empty());
    }
}
