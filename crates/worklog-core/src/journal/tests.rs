//! Tests for the journal module.

use super::*;
use crate::models::{BulletStyle, TaskStatus};
use crate::params::{
    CreateReport, DateKey, DeleteReport, EditReport, RangeQuery, TaskCreate, TaskRemove,
    UpdatePreferences,
};
use crate::ReportError;
use tempfile::TempDir;

/// Journal over a database file in a fresh temp directory.
async fn test_journal() -> (TempDir, Journal) {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let journal = JournalBuilder::new()
        .with_database_path(Some(dir.path().join("journal.db")))
        .build()
        .await
        .expect("Failed to open journal");
    (dir, journal)
}

/// Helper to build minimal valid creation parameters for a date
fn report_params(date: &str) -> CreateReport {
    CreateReport {
        date: Some(date.to_string()),
        name: Some("Sam".to_string()),
        projects: vec!["Rukkor".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_report_with_explicit_fields() {
    let (_temp_dir, journal) = test_journal().await;

    let report = journal
        .create_report(&CreateReport {
            date: Some("2024-03-01".to_string()),
            name: Some("Sam".to_string()),
            projects: vec!["Rukkor".to_string(), "Internal".to_string()],
            next_task: Some("Deploy release".to_string()),
            bullet: Some("star".to_string()),
            sub_icon: Some("->".to_string()),
            task_gap: Some(2),
            ..Default::default()
        })
        .await
        .expect("Failed to create report");

    assert_eq!(report.date.to_string(), "2024-03-01");
    assert_eq!(report.name, "Sam");
    assert_eq!(report.projects, vec!["Rukkor", "Internal"]);
    assert_eq!(report.next_task, Some("Deploy release".to_string()));
    assert_eq!(report.bullet, BulletStyle::Star);
    assert_eq!(report.sub_icon, BulletStyle::DashArrow);
    assert_eq!(report.gaps.task_gap, 2);
    assert_eq!(report.gaps.subtask_gap, 1);

    // Verify the report round-trips through the store
    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report")
        .expect("Report should exist");
    assert_eq!(stored, report);
}

#[tokio::test]
async fn test_create_report_falls_back_to_preferences() {
    let (_temp_dir, journal) = test_journal().await;

    // Persist preferences first
    journal
        .update_preferences(&UpdatePreferences {
            name: Some("Alex".to_string()),
            bullet: Some("number".to_string()),
            sub_icon: Some(">>".to_string()),
            task_gap: Some(3),
            ..Default::default()
        })
        .await
        .expect("Failed to update preferences");

    // Create without name, styles or gaps
    let report = journal
        .create_report(&CreateReport {
            date: Some("2024-03-01".to_string()),
            projects: vec!["Rukkor".to_string()],
            ..Default::default()
        })
        .await
        .expect("Failed to create report");

    assert_eq!(report.name, "Alex");
    assert_eq!(report.bullet, BulletStyle::Number);
    assert_eq!(report.sub_icon, BulletStyle::DoubleChevron);
    assert_eq!(report.gaps.task_gap, 3);
    assert_eq!(report.gaps.subtask_gap, 1);
}

#[tokio::test]
async fn test_create_report_requires_a_name_from_somewhere() {
    let (_temp_dir, journal) = test_journal().await;

    // No name in the params and none stored in preferences
    let result = journal
        .create_report(&CreateReport {
            date: Some("2024-03-01".to_string()),
            projects: vec!["Rukkor".to_string()],
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(ReportError::InvalidInput { ref field, .. }) if field == "name"
    ));
}

#[tokio::test]
async fn test_create_report_rejects_duplicate_date() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let result = journal.create_report(&report_params("2024-03-01")).await;
    assert!(matches!(result, Err(ReportError::DuplicateDate { .. })));
}

#[tokio::test]
async fn test_create_report_overwrite_replaces_existing() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let replacement = journal
        .create_report(&CreateReport {
            name: Some("Alex".to_string()),
            overwrite: true,
            ..report_params("2024-03-01")
        })
        .await
        .expect("Failed to overwrite report");

    assert_eq!(replacement.name, "Alex");

    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report")
        .expect("Report should exist");
    assert_eq!(stored.name, "Alex");
}

#[tokio::test]
async fn test_get_report_not_found() {
    let (_temp_dir, journal) = test_journal().await;

    let result = journal
        .get_report("2030-01-01".parse().unwrap())
        .await
        .expect("Should not fail on missing report");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_edit_report_changes_fields_and_reports_labels() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let (updated, changes) = journal
        .edit_report(&EditReport {
            date: "2024-03-01".to_string(),
            name: Some("Alex".to_string()),
            task_gap: Some(2),
            ..Default::default()
        })
        .await
        .expect("Failed to edit report");

    assert_eq!(updated.name, "Alex");
    assert_eq!(updated.gaps.task_gap, 2);
    assert_eq!(changes, vec!["name".to_string(), "task gap".to_string()]);
}

#[tokio::test]
async fn test_edit_report_moves_date_key() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let (updated, changes) = journal
        .edit_report(&EditReport {
            date: "2024-03-01".to_string(),
            new_date: Some("2024-03-02".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to move report");

    assert_eq!(updated.date.to_string(), "2024-03-02");
    assert_eq!(changes, vec!["date: 2024-03-01 -> 2024-03-02".to_string()]);

    // Old key is gone, new key resolves
    let old = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report");
    assert!(old.is_none());

    let moved = journal
        .get_report("2024-03-02".parse().unwrap())
        .await
        .expect("Failed to get report")
        .expect("Report should exist under new date");
    assert_eq!(moved.name, "Sam");
}

#[tokio::test]
async fn test_edit_report_not_found() {
    let (_temp_dir, journal) = test_journal().await;

    let result = journal
        .edit_report(&EditReport {
            date: "2030-01-01".to_string(),
            name: Some("Alex".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(ReportError::ReportNotFound { .. })));
}

#[tokio::test]
async fn test_delete_report_requires_confirmation() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let result = journal
        .delete_report(&DeleteReport {
            date: "2024-03-01".to_string(),
            confirmed: false,
        })
        .await;

    assert!(matches!(
        result,
        Err(ReportError::InvalidInput { ref field, .. }) if field == "confirmed"
    ));

    // The report is still there
    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report");
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_delete_report_with_confirmation() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let deleted = journal
        .delete_report(&DeleteReport {
            date: "2024-03-01".to_string(),
            confirmed: true,
        })
        .await
        .expect("Failed to delete report")
        .expect("Report should exist");

    assert_eq!(deleted.name, "Sam");

    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Should not fail on deleted report");
    assert!(stored.is_none());
}

#[tokio::test]
async fn test_delete_report_not_found_returns_none() {
    let (_temp_dir, journal) = test_journal().await;

    let result = journal
        .delete_report(&DeleteReport {
            date: "2030-01-01".to_string(),
            confirmed: true,
        })
        .await
        .expect("Should not fail on missing report");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_list_reports_summary_keeps_insertion_order() {
    let (_temp_dir, journal) = test_journal().await;

    // Insert out of date order
    journal
        .create_report(&report_params("2024-03-15"))
        .await
        .expect("Failed to create report");
    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Fix login bug".to_string(),
            hours: 1,
            minutes: 30,
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let summaries = journal
        .list_reports_summary()
        .await
        .expect("Failed to list report summaries");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].date.to_string(), "2024-03-15");
    assert_eq!(summaries[1].date.to_string(), "2024-03-01");
    assert_eq!(summaries[1].task_count, 1);
    assert_eq!(summaries[1].total_minutes, 90);
}

#[tokio::test]
async fn test_filter_reports_summary_by_range() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-01-05"))
        .await
        .expect("Failed to create report");
    journal
        .create_report(&report_params("2024-01-15"))
        .await
        .expect("Failed to create report");
    journal
        .create_report(&report_params("2024-02-01"))
        .await
        .expect("Failed to create report");

    let summaries = journal
        .filter_reports_summary(&RangeQuery {
            start: "01/01/2024".to_string(),
            end: "31/01/2024".to_string(),
        })
        .await
        .expect("Failed to filter reports");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].date.to_string(), "2024-01-05");
    assert_eq!(summaries[1].date.to_string(), "2024-01-15");
}

#[tokio::test]
async fn test_filter_reports_summary_invalid_bounds_select_nothing() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-01-05"))
        .await
        .expect("Failed to create report");

    // ISO-ordered bounds do not parse as DD/MM/YYYY
    let summaries = journal
        .filter_reports_summary(&RangeQuery {
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
        })
        .await
        .expect("Failed to filter reports");
    assert!(summaries.is_empty());

    // Calendar-impossible bound
    let summaries = journal
        .filter_reports_summary(&RangeQuery {
            start: "31/02/2024".to_string(),
            end: "31/03/2024".to_string(),
        })
        .await
        .expect("Failed to filter reports");
    assert!(summaries.is_empty());
}

#[tokio::test]
async fn test_export_rows_chronological() {
    let (_temp_dir, journal) = test_journal().await;

    // Insert out of date order so the export has to re-sort
    journal
        .create_report(&report_params("2024-01-15"))
        .await
        .expect("Failed to create report");
    journal
        .create_report(&report_params("2024-01-05"))
        .await
        .expect("Failed to create report");

    journal
        .add_task(&TaskCreate {
            date: "2024-01-15".to_string(),
            title: "Later work".to_string(),
            task_id: Some("T2".to_string()),
            hours: 2,
            ..Default::default()
        })
        .await
        .expect("Failed to add task");
    journal
        .add_task(&TaskCreate {
            date: "2024-01-05".to_string(),
            title: "Earlier work".to_string(),
            task_id: Some("T1".to_string()),
            minutes: 45,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let rows = journal
        .export_rows(&RangeQuery {
            start: "01/01/2024".to_string(),
            end: "31/01/2024".to_string(),
        })
        .await
        .expect("Failed to export rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2024-01-05");
    assert_eq!(rows[0].id, "T1");
    assert_eq!(rows[0].title, "Earlier work");
    assert_eq!(rows[0].status, "Completed");
    assert_eq!(rows[0].duration, "0h 45m");
    assert_eq!(rows[1].date, "2024-01-15");
    assert_eq!(rows[1].duration, "2h 0m");
}

#[tokio::test]
async fn test_export_rows_invalid_bounds_select_nothing() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-01-05"))
        .await
        .expect("Failed to create report");

    let rows = journal
        .export_rows(&RangeQuery {
            start: "soon".to_string(),
            end: "later".to_string(),
        })
        .await
        .expect("Failed to export rows");

    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_show_report_preview() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");
    journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Fix bug".to_string(),
            task_id: Some("T1".to_string()),
            hours: 1,
            minutes: 30,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let preview = journal
        .show_report_preview(&DateKey {
            date: "2024-03-01".to_string(),
        })
        .await
        .expect("Failed to render preview")
        .expect("Report should exist");

    assert!(preview.starts_with("Today's work update - 2024-03-01\n"));
    assert!(preview.contains("Project: Rukkor\n"));
    assert!(preview
        .lines()
        .any(|line| line == "● ID: T1 - Fix bug (Completed) (1h 30min)"));
    assert!(preview.ends_with("Thanks & regards\nSam\n"));
}

#[tokio::test]
async fn test_show_report_preview_uses_preferences() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .update_preferences(&UpdatePreferences {
            closing: Some("Best".to_string()),
            show_status: Some(false),
            ..Default::default()
        })
        .await
        .expect("Failed to update preferences");

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");
    journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Fix bug".to_string(),
            hours: 1,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let preview = journal
        .show_report_preview(&DateKey {
            date: "2024-03-01".to_string(),
        })
        .await
        .expect("Failed to render preview")
        .expect("Report should exist");

    assert!(preview.lines().any(|line| line == "● Fix bug (1h)"));
    assert!(!preview.contains("Completed"));
    assert!(preview.ends_with("Best\nSam\n"));
}

#[tokio::test]
async fn test_show_report_preview_not_found() {
    let (_temp_dir, journal) = test_journal().await;

    let preview = journal
        .show_report_preview(&DateKey {
            date: "2030-01-01".to_string(),
        })
        .await
        .expect("Should not fail on missing report");

    assert!(preview.is_none());
}

#[tokio::test]
async fn test_add_task_to_report() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let (first_id, _) = journal
        .add_task_to_report(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Fix login bug".to_string(),
            task_id: Some("T1".to_string()),
            hours: 1,
            minutes: 45,
            status: Some("done".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let (second_id, report) = journal
        .add_task_to_report(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Review PRs".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    assert_eq!(first_id, 1);
    assert_eq!(second_id, 2);
    assert_eq!(report.tasks.len(), 2);
    assert_eq!(report.tasks[0].title, "Fix login bug");
    assert_eq!(report.tasks[0].status, Some(TaskStatus::Completed));
    assert_eq!(report.tasks[1].title, "Review PRs");

    // The mutation is persisted
    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report")
        .expect("Report should exist");
    assert_eq!(stored.tasks.len(), 2);
}

#[tokio::test]
async fn test_add_task_under_parent() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let (parent_id, _) = journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Release v2".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add parent task");

    let (child_id, report) = journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            parent: Some(parent_id),
            title: "Tag the build".to_string(),
            minutes: 105,
            ..Default::default()
        })
        .await
        .expect("Failed to add subtask");

    assert_eq!(child_id, 1);
    assert_eq!(report.tasks[0].subtasks.len(), 1);
    assert_eq!(report.tasks[0].subtasks[0].title, "Tag the build");
}

#[tokio::test]
async fn test_add_task_to_missing_report() {
    let (_temp_dir, journal) = test_journal().await;

    let result = journal
        .add_task(&TaskCreate {
            date: "2030-01-01".to_string(),
            title: "Orphan".to_string(),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(ReportError::ReportNotFound { .. })));
}

#[tokio::test]
async fn test_add_task_rejects_unknown_status() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let result = journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Fix bug".to_string(),
            status: Some("finished".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(ReportError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[tokio::test]
async fn test_remove_task_from_report() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");
    journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Keep me".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");
    let (doomed_id, _) = journal
        .add_task(&TaskCreate {
            date: "2024-03-01".to_string(),
            title: "Remove me".to_string(),
            ..Default::default()
        })
        .await
        .expect("Failed to add task");

    let (removed, report) = journal
        .remove_task_from_report(&TaskRemove {
            date: "2024-03-01".to_string(),
            parent: None,
            id: doomed_id,
        })
        .await
        .expect("Failed to remove task");

    assert_eq!(removed.title, "Remove me");
    assert_eq!(report.tasks.len(), 1);
    assert_eq!(report.tasks[0].title, "Keep me");

    // The removal is persisted
    let stored = journal
        .get_report("2024-03-01".parse().unwrap())
        .await
        .expect("Failed to get report")
        .expect("Report should exist");
    assert_eq!(stored.tasks.len(), 1);
}

#[tokio::test]
async fn test_remove_task_not_found() {
    let (_temp_dir, journal) = test_journal().await;

    journal
        .create_report(&report_params("2024-03-01"))
        .await
        .expect("Failed to create report");

    let result = journal
        .remove_task(&TaskRemove {
            date: "2024-03-01".to_string(),
            parent: None,
            id: 42,
        })
        .await;

    assert!(matches!(
        result,
        Err(ReportError::TaskNotFound { id: 42, .. })
    ));
}

#[tokio::test]
async fn test_update_preferences_persists_changes() {
    let (_temp_dir, journal) = test_journal().await;

    let (prefs, changes) = journal
        .update_preferences(&UpdatePreferences {
            name: Some("Sam".to_string()),
            closing: Some("Best".to_string()),
            show_hours: Some(false),
            ..Default::default()
        })
        .await
        .expect("Failed to update preferences");

    assert_eq!(prefs.name, "Sam");
    assert_eq!(prefs.closing, "Best");
    assert!(!prefs.visibility.show_hours);
    assert_eq!(
        changes,
        vec![
            "name".to_string(),
            "closing".to_string(),
            "show hours".to_string()
        ]
    );

    // A fresh load sees the stored values
    let loaded = journal
        .preferences()
        .await
        .expect("Failed to load preferences");
    assert_eq!(loaded, prefs);

    // Re-applying the same values reports no changes
    let (_, changes) = journal
        .update_preferences(&UpdatePreferences {
            name: Some("Sam".to_string()),
            closing: Some("Best".to_string()),
            show_hours: Some(false),
            ..Default::default()
        })
        .await
        .expect("Failed to update preferences");
    assert!(changes.is_empty());
}

#[tokio::test]
async fn test_preferences_default_when_never_saved() {
    let (_temp_dir, journal) = test_journal().await;

    let prefs = journal
        .preferences()
        .await
        .expect("Failed to load preferences");

    assert_eq!(prefs.name, "");
    assert_eq!(prefs.closing, "Thanks & regards");
    assert_eq!(prefs.bullet, BulletStyle::Bullet);
    assert_eq!(prefs.sub_icon, BulletStyle::Arrow);
    assert!(prefs.visibility.show_id);
}
