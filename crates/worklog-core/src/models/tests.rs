#[cfg(test)]
mod model_tests {
    use crate::{
        ReportError,
        models::{
            BulletStyle, EditReportRequest, GapSettings, Preferences, ReportDocument, Task,
            TaskStatus, VisibilitySettings,
        },
    };

    fn create_test_report() -> ReportDocument {
        let mut report = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
        report.projects = vec!["Rukkor".to_string()];
        report.tasks = vec![
            Task {
                task_id: Some("T1".to_string()),
                hours: 1,
                minutes: 45,
                status: Some(TaskStatus::Completed),
                ..Task::new(1, "Fix login bug")
            },
            Task {
                subtasks: vec![
                    Task {
                        minutes: 105,
                        ..Task::new(1, "Build artifacts")
                    },
                    Task {
                        minutes: 30,
                        ..Task::new(2, "Publish")
                    },
                ],
                ..Task::new(2, "Release v2")
            },
        ];
        report
    }

    #[test]
    fn test_task_status_parse_aliases() {
        assert_eq!("pending".parse(), Ok(TaskStatus::Pending));
        assert_eq!("todo".parse(), Ok(TaskStatus::Pending));
        assert_eq!("inprogress".parse(), Ok(TaskStatus::InProgress));
        assert_eq!("In Progress".parse(), Ok(TaskStatus::InProgress));
        assert_eq!("in_progress".parse(), Ok(TaskStatus::InProgress));
        assert_eq!("done".parse(), Ok(TaskStatus::Completed));
        assert_eq!("Completed".parse(), Ok(TaskStatus::Completed));
        assert_eq!("on hold".parse(), Ok(TaskStatus::OnHold));
        assert!("finished".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_status_labels() {
        assert_eq!(TaskStatus::Pending.label(), "Pending");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!(TaskStatus::Completed.label(), "Completed");
        assert_eq!(TaskStatus::OnHold.label(), "On Hold");
        assert_eq!(TaskStatus::InProgress.as_str(), "inprogress");
    }

    #[test]
    fn test_bullet_style_tag_round_trip() {
        let styles = [
            BulletStyle::Bullet,
            BulletStyle::Dot,
            BulletStyle::Normal,
            BulletStyle::Number,
            BulletStyle::Star,
            BulletStyle::Square,
            BulletStyle::Diamond,
            BulletStyle::Chevron,
            BulletStyle::DoubleChevron,
            BulletStyle::Arrow,
            BulletStyle::LongArrow,
            BulletStyle::DashArrow,
            BulletStyle::Dash,
            BulletStyle::DoubleDash,
        ];
        for style in styles {
            assert_eq!(BulletStyle::from(style.tag()), style);
        }
    }

    #[test]
    fn test_bullet_style_glyph_table() {
        assert_eq!(BulletStyle::Bullet.glyph(0), "● ");
        assert_eq!(BulletStyle::Dot.glyph(0), "• ");
        assert_eq!(BulletStyle::Normal.glyph(0), "○ ");
        assert_eq!(BulletStyle::Star.glyph(0), "★ ");
        assert_eq!(BulletStyle::Square.glyph(0), "■ ");
        assert_eq!(BulletStyle::Diamond.glyph(0), "♦ ");
        assert_eq!(BulletStyle::Chevron.glyph(0), "> ");
        assert_eq!(BulletStyle::DoubleChevron.glyph(0), ">> ");
        assert_eq!(BulletStyle::Arrow.glyph(0), "=> ");
        assert_eq!(BulletStyle::LongArrow.glyph(0), "==> ");
        assert_eq!(BulletStyle::DashArrow.glyph(0), "-> ");
        assert_eq!(BulletStyle::Dash.glyph(0), "- ");
        assert_eq!(BulletStyle::DoubleDash.glyph(0), "-- ");
    }

    #[test]
    fn test_number_style_renders_one_based_ordinals() {
        assert_eq!(BulletStyle::Number.glyph(0), "1. ");
        assert_eq!(BulletStyle::Number.glyph(4), "5. ");
        // Other styles ignore the ordinal entirely.
        assert_eq!(BulletStyle::Bullet.glyph(7), "● ");
    }

    #[test]
    fn test_unknown_bullet_tag_falls_back_to_dash() {
        assert_eq!(BulletStyle::from("wavy"), BulletStyle::Dash);
        assert_eq!(BulletStyle::from(""), BulletStyle::Dash);
        assert_eq!(BulletStyle::from("  star  "), BulletStyle::Star);
    }

    #[test]
    fn test_leaf_duration_passes_through_raw_fields() {
        let task = Task {
            hours: 1,
            minutes: 75,
            ..Task::new(1, "Spike")
        };
        // Stored minutes beyond 59 are never normalized on leaves.
        assert_eq!(task.effective_duration(), (1, 75));
        assert_eq!(task.total_minutes(), 135);
    }

    #[test]
    fn test_parent_duration_is_normalized_subtask_sum() {
        let report = create_test_report();
        let parent = &report.tasks[1];

        // 105min + 30min = 135min, normalized to 2h 15min. The parent's own
        // hour/minute fields are ignored once subtasks exist.
        assert_eq!(parent.effective_duration(), (2, 15));
        assert_eq!(parent.total_minutes(), 135);
        assert_eq!(report.total_minutes(), 105 + 135);
    }

    #[test]
    fn test_document_serde_round_trip() {
        let report = create_test_report();
        let json = serde_json::to_string(&report).unwrap();
        let restored: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, report);
    }

    #[test]
    fn test_document_deserialize_fills_defaults() {
        let json = r#"{"date": "2024-03-01", "name": "Sam"}"#;
        let report: ReportDocument = serde_json::from_str(json).unwrap();

        assert!(report.tasks.is_empty());
        assert!(report.projects.is_empty());
        assert_eq!(report.next_task, None);
        assert_eq!(report.bullet, BulletStyle::Bullet);
        assert_eq!(report.sub_icon, BulletStyle::Arrow);
        assert_eq!(report.gaps, GapSettings::default());
    }

    #[test]
    fn test_document_deserialize_tolerates_unknown_bullet_tag() {
        let json = r#"{"date": "2024-03-01", "name": "Sam", "bullet": "wavy"}"#;
        let report: ReportDocument = serde_json::from_str(json).unwrap();
        assert_eq!(report.bullet, BulletStyle::Dash);
    }

    #[test]
    fn test_validate_accepts_complete_report() {
        assert!(create_test_report().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut report = create_test_report();
        report.name = "   ".to_string();

        match report.validate().unwrap_err() {
            ReportError::InvalidInput { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_blank_projects() {
        let mut report = create_test_report();
        report.projects = vec!["  ".to_string()];

        match report.validate().unwrap_err() {
            ReportError::InvalidInput { field, .. } => assert_eq!(field, "projects"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_gap() {
        let mut report = create_test_report();
        report.gaps.task_gap = 0;

        match report.validate().unwrap_err() {
            ReportError::InvalidInput { field, .. } => assert_eq!(field, "gaps"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_task_assigns_next_sibling_id() {
        let mut report = create_test_report();

        let id = report.add_task(None, Task::new(0, "Standup")).unwrap();
        assert_eq!(id, 3);
        assert_eq!(report.tasks[2].title, "Standup");

        // Ids are max+1, so removing a middle task never recycles its id.
        report.remove_task(None, 2).unwrap();
        let id = report.add_task(None, Task::new(0, "Retro")).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn test_add_task_nests_under_parent() {
        let mut report = create_test_report();

        let id = report.add_task(Some(2), Task::new(0, "Tag release")).unwrap();
        assert_eq!(id, 3);
        assert_eq!(report.tasks[1].subtasks.len(), 3);
        assert_eq!(report.tasks[1].subtasks[2].title, "Tag release");
    }

    #[test]
    fn test_add_task_missing_parent_fails() {
        let mut report = create_test_report();

        match report.add_task(Some(99), Task::new(0, "Orphan")).unwrap_err() {
            ReportError::TaskNotFound { id, .. } => assert_eq!(id, 99),
            other => panic!("Expected TaskNotFound error, got {other:?}"),
        }
        assert_eq!(report.tasks.len(), 2);
    }

    #[test]
    fn test_remove_task_returns_removed_task() {
        let mut report = create_test_report();

        let removed = report.remove_task(Some(2), 1).unwrap();
        assert_eq!(removed.title, "Build artifacts");
        assert_eq!(report.tasks[1].subtasks.len(), 1);

        match report.remove_task(None, 42).unwrap_err() {
            ReportError::TaskNotFound { id, .. } => assert_eq!(id, 42),
            other => panic!("Expected TaskNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_request_apply_reports_changes() {
        let mut report = create_test_report();
        let request = EditReportRequest {
            new_date: Some("2024-03-02".parse().unwrap()),
            name: Some("Alex".to_string()),
            next_task: Some(None),
            task_gap: Some(2),
            ..Default::default()
        };

        let changes = request.apply(&mut report);

        assert_eq!(report.date, "2024-03-02".parse().unwrap());
        assert_eq!(report.name, "Alex");
        assert_eq!(report.next_task, None);
        assert_eq!(report.gaps.task_gap, 2);
        assert_eq!(
            changes,
            vec![
                "date: 2024-03-01 -> 2024-03-02".to_string(),
                "name".to_string(),
                "task gap".to_string(),
            ]
        );
    }

    #[test]
    fn test_edit_request_apply_skips_unchanged_fields() {
        let mut report = create_test_report();
        let request = EditReportRequest {
            name: Some("Sam".to_string()),
            projects: Some(vec!["Rukkor".to_string()]),
            ..Default::default()
        };

        let changes = request.apply(&mut report);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_edit_request_try_from_parses_dates() {
        use crate::params::EditReport;

        let params = EditReport {
            date: "2024-03-01".to_string(),
            new_date: Some("2024-03-05".to_string()),
            name: Some("Alex".to_string()),
            bullet: Some("star".to_string()),
            ..Default::default()
        };

        let request = EditReportRequest::try_from(&params).unwrap();
        assert_eq!(request.new_date, Some("2024-03-05".parse().unwrap()));
        assert_eq!(request.name, Some("Alex".to_string()));
        assert_eq!(request.bullet, Some(BulletStyle::Star));
        assert_eq!(request.next_task, None);
    }

    #[test]
    fn test_edit_request_try_from_rejects_bad_date() {
        use crate::params::EditReport;

        let params = EditReport {
            date: "2024-03-01".to_string(),
            new_date: Some("05/03/2024".to_string()),
            ..Default::default()
        };

        match EditReportRequest::try_from(&params).unwrap_err() {
            ReportError::InvalidInput { field, .. } => assert_eq!(field, "new_date"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_edit_request_try_from_clears_next_task() {
        use crate::params::EditReport;

        let params = EditReport {
            date: "2024-03-01".to_string(),
            clear_next_task: true,
            ..Default::default()
        };

        let request = EditReportRequest::try_from(&params).unwrap();
        assert_eq!(request.next_task, Some(None));
    }

    #[test]
    fn test_edit_request_try_from_rejects_zero_gap() {
        use crate::params::EditReport;

        let params = EditReport {
            date: "2024-03-01".to_string(),
            task_gap: Some(0),
            ..Default::default()
        };

        match EditReportRequest::try_from(&params).unwrap_err() {
            ReportError::InvalidInput { field, .. } => assert_eq!(field, "task_gap"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_preferences_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.closing, "Thanks & regards");
        assert_eq!(prefs.bullet, BulletStyle::Bullet);
        assert_eq!(prefs.sub_icon, BulletStyle::Arrow);
        assert_eq!(prefs.gaps, GapSettings { task_gap: 1, subtask_gap: 1 });
        assert!(prefs.visibility.show_id);
        assert!(prefs.visibility.show_next_task);
    }

    #[test]
    fn test_visibility_deserialize_defaults_missing_flags() {
        let flags: VisibilitySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, VisibilitySettings::default());

        let flags: VisibilitySettings =
            serde_json::from_str(r#"{"show_hours": false}"#).unwrap();
        assert!(!flags.show_hours);
        assert!(flags.show_status);
    }
}
