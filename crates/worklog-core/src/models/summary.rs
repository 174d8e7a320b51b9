//! Report summary types for list views.

use jiff::civil::Date;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ReportDocument;

/// Compact view of a stored report for list output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Date key of the report
    pub date: Date,
    /// Author name
    pub name: String,
    /// Selected projects, insertion order
    pub projects: Vec<String>,
    /// Number of top-level tasks
    pub task_count: u32,
    /// Effective duration across all tasks, in minutes
    pub total_minutes: u32,
    /// Row creation timestamp (UTC)
    pub created_at: Timestamp,
    /// Last update timestamp (UTC)
    pub updated_at: Timestamp,
}

impl ReportSummary {
    /// Build a summary from a stored document plus its row timestamps.
    pub fn from_document(
        doc: &ReportDocument,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            date: doc.date,
            name: doc.name.clone(),
            projects: doc.projects.clone(),
            task_count: doc.tasks.len() as u32,
            total_minutes: doc.total_minutes(),
            created_at,
            updated_at,
        }
    }
}
