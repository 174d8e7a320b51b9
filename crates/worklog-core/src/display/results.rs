//! Formatted confirmations for report mutations.
//!
//! Create, update and delete each get a wrapper whose Display impl prints
//! the outcome line followed by a short overview of the report involved.
//! [`OperationStatus`] covers operations that only need a status line.

use std::fmt;

use crate::models::ReportDocument;

fn write_overview(f: &mut fmt::Formatter<'_>, report: &ReportDocument) -> fmt::Result {
    if !report.projects.is_empty() {
        writeln!(f, "- Projects: {}", report.projects.join(" & "))?;
    }
    writeln!(f, "- Author: {}", report.name)?;
    writeln!(f, "- Tasks: {}", report.tasks.len())?;

    let total = report.total_minutes();
    if total > 0 {
        writeln!(f, "- Time logged: {}h {}m", total / 60, total % 60)?;
    }
    Ok(())
}

/// Confirmation for a newly saved report.
///
/// # Examples
///
/// ```rust
/// use worklog_core::{display::CreateResult, models::ReportDocument};
///
/// let report = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
/// println!("{}", CreateResult::new(report));
/// ```
pub struct CreateResult {
    report: ReportDocument,
}

impl CreateResult {
    pub fn new(report: ReportDocument) -> Self {
        Self { report }
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved report for {}", self.report.date)?;
        writeln!(f)?;
        write_overview(f, &self.report)
    }
}

/// Confirmation for an edited report, listing the fields that changed.
///
/// # Examples
///
/// ```rust
/// use worklog_core::{display::UpdateResult, models::ReportDocument};
///
/// let report = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
/// let changes = vec!["name".to_string(), "task gap".to_string()];
/// println!("{}", UpdateResult::new(report, changes));
/// ```
pub struct UpdateResult {
    report: ReportDocument,
    changes: Vec<String>,
}

impl UpdateResult {
    pub fn new(report: ReportDocument, changes: Vec<String>) -> Self {
        Self { report, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated report for {}", self.report.date)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write_overview(f, &self.report)
    }
}

/// Confirmation for a deleted report, counting the tasks that went with it.
pub struct DeleteResult {
    report: ReportDocument,
}

impl DeleteResult {
    pub fn new(report: ReportDocument) -> Self {
        Self { report }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.report.tasks.len();
        let noun = if count == 1 { "task" } else { "tasks" };
        writeln!(
            f,
            "Deleted report for {} ({count} {noun})",
            self.report.date
        )
    }
}

/// A bare status line for operations that do not return a report.
pub struct OperationStatus {
    message: String,
    success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Success:" } else { "Error:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}
