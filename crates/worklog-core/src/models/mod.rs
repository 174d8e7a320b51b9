//! Data models for report documents and their task trees.
//!
//! This module contains the core domain models of the worklog report
//! builder. Display implementations live in [`crate::display`] to keep data
//! structures separate from presentation: models know how durations derive
//! and how task trees are edited, while the display wrappers know about
//! bullets, indentation and gaps.
//!
//! Two invariants worth knowing when working with these types:
//!
//! - A [`Task`] with subtasks has a *derived* duration: its own
//!   `hours`/`minutes` fields stay stored but the effective value is the
//!   normalized subtask sum (see [`Task::effective_duration`]).
//! - [`BulletStyle`] parsing never fails; unknown tags collapse to the dash
//!   style so stored documents always render.
//!
//! # Examples
//!
//! ```rust
//! use worklog_core::models::{Task, TaskStatus};
//!
//! let mut parent = Task::new(1, "Release prep");
//! parent.subtasks = vec![
//!     Task {
//!         hours: 1,
//!         minutes: 45,
//!         ..Task::new(1, "Changelog")
//!     },
//!     Task {
//!         minutes: 30,
//!         status: Some(TaskStatus::Completed),
//!         ..Task::new(2, "Tag build")
//!     },
//! ];
//!
//! // 105min + 30min normalizes to 2h 15min.
//! assert_eq!(parent.effective_duration(), (2, 15));
//! ```

pub mod bullet;
pub mod report;
pub mod requests;
pub mod settings;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use bullet::BulletStyle;
pub use report::ReportDocument;
pub use requests::EditReportRequest;
pub use settings::{GapSettings, Preferences, VisibilitySettings};
pub use status::TaskStatus;
pub use summary::ReportSummary;
pub use task::Task;
