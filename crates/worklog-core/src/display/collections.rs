//! Listing wrapper for report summaries.
//!
//! List output concatenates the markdown block of each summary; the wrapper
//! owns the empty-listing message so every caller shows the same one.

use std::{fmt, ops::Index};

use crate::models::ReportSummary;

/// Report summaries ready to print as a markdown listing.
///
/// The wrapper adds no title of its own, so callers can prefix whichever
/// heading fits their context.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use worklog_core::{display::ReportSummaries, models::ReportSummary};
///
/// let summary = ReportSummary {
///     date: "2024-03-01".parse().unwrap(),
///     name: "Sam".to_string(),
///     projects: vec!["Rukkor".to_string()],
///     task_count: 2,
///     total_minutes: 90,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let reports = ReportSummaries(vec![summary]);
/// let output = format!("{}", reports);
/// assert!(output.contains("2024-03-01"));
/// ```
pub struct ReportSummaries(pub Vec<ReportSummary>);

impl ReportSummaries {
    /// True when no reports matched.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of summaries in the listing.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Index<usize> for ReportSummaries {
    type Output = ReportSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for ReportSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No reports found.");
        }
        for report in &self.0 {
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}
