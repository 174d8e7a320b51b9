//! Display implementations for domain models.
//!
//! Kept separate from the model definitions so the data types stay free of
//! presentation concerns. Statuses display as their line labels, bullet
//! styles as their tags, and summaries as the markdown blocks used by list
//! output.

use std::fmt;

use jiff::tz::TimeZone;

use crate::models::{BulletStyle, Preferences, ReportSummary, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for BulletStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let author = if self.name.is_empty() {
            "(not set)"
        } else {
            &self.name
        };

        writeln!(f, "- **Author**: {author}")?;
        writeln!(f, "- **Closing**: {}", self.closing)?;
        writeln!(f, "- **Bullet**: {}", self.bullet)?;
        writeln!(f, "- **Subtask icon**: {}", self.sub_icon)?;
        writeln!(f, "- **Task gap**: {}", self.gaps.task_gap)?;
        writeln!(f, "- **Subtask gap**: {}", self.gaps.subtask_gap)?;
        writeln!(f, "- **Show id**: {}", self.visibility.show_id)?;
        writeln!(f, "- **Show status**: {}", self.visibility.show_status)?;
        writeln!(f, "- **Show hours**: {}", self.visibility.show_hours)?;
        writeln!(f, "- **Show next task**: {}", self.visibility.show_next_task)
    }
}

impl fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tasks = if self.task_count == 1 { "task" } else { "tasks" };
        let logged = match (self.total_minutes / 60, self.total_minutes % 60) {
            (0, 0) => String::new(),
            (0, m) => format!(", {m}m"),
            (h, 0) => format!(", {h}h"),
            (h, m) => format!(", {h}h {m}m"),
        };

        writeln!(f, "## {} ({} {tasks}{logged})", self.date, self.task_count)?;
        writeln!(f)?;

        if !self.projects.is_empty() {
            writeln!(f, "- **Projects**: {}", self.projects.join(" & "))?;
        }
        writeln!(f, "- **Author**: {}", self.name)?;
        // Stored timestamps are UTC; lists read better in local time.
        let updated = self.updated_at.to_zoned(TimeZone::system());
        writeln!(f, "- **Updated**: {}", updated.strftime("%Y-%m-%d %H:%M %Z"))?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::models::{Preferences, ReportDocument, ReportSummary, Task, TaskStatus};

    #[test]
    fn preferences_list_all_fields() {
        let prefs = Preferences::default();
        let output = prefs.to_string();

        assert!(output.starts_with("- **Author**: (not set)\n"));
        assert!(output.contains("- **Closing**: Thanks & regards\n"));
        assert!(output.contains("- **Subtask icon**: =>\n"));
        assert!(output.contains("- **Task gap**: 1\n"));
        assert!(output.ends_with("- **Show next task**: true\n"));
    }

    #[test]
    fn status_displays_its_label() {
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn summary_block_shows_counts_and_projects() {
        let mut doc = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
        doc.projects = vec!["Rukkor".to_string(), "Internal".to_string()];
        doc.tasks = vec![
            Task {
                hours: 5,
                minutes: 20,
                ..Task::new(1, "Fix bug")
            },
            Task::new(2, "Review"),
        ];

        let ts = Timestamp::from_second(1_640_995_200).unwrap();
        let summary = ReportSummary::from_document(&doc, ts, ts);
        let output = summary.to_string();

        assert!(output.starts_with("## 2024-03-01 (2 tasks, 5h 20m)\n"));
        assert!(output.contains("- **Projects**: Rukkor & Internal\n"));
        assert!(output.contains("- **Author**: Sam\n"));
    }

    #[test]
    fn summary_block_drops_empty_duration() {
        let doc = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
        let ts = Timestamp::from_second(1_640_995_200).unwrap();
        let summary = ReportSummary::from_document(&doc, ts, ts);

        assert!(summary.to_string().starts_with("## 2024-03-01 (0 tasks)\n"));
    }
}
