//! Core library for the worklog daily report builder.
//!
//! This crate provides the core business logic for building and storing
//! daily work reports, including database operations, data models, report
//! formatting, and error handling.
//!
//! # Formatting layers
//!
//! All output is built on [`std::fmt::Display`], in three layers:
//!
//! - [`models`] types render their own markdown fragments (status labels,
//!   summary blocks, preference listings)
//! - [`display`] wraps them into the shapes callers print: the shareable
//!   preview, operation confirmations, listings and the export table
//! - the CLI applies terminal styling on top, while the MCP server sends
//!   the same text unstyled
//!
//! The shareable preview is rendered in one place, so the CLI and the MCP
//! server emit identical bytes for it.
//!
//! # Quick Start
//!
//! ```rust
//! use worklog_core::{JournalBuilder, params::CreateReport};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let journal = JournalBuilder::new()
//!     .with_database_path(Some("worklog.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreateReport {
//!     date: Some("2024-03-01".to_string()),
//!     name: Some("Sam".to_string()),
//!     projects: vec!["Rukkor".to_string()],
//!     ..Default::default()
//! };
//! let report = journal.create_report(&params).await?;
//! println!("Created report for {}", report.date);
//!
//! // Print every stored report as a summary block.
//! let reports = journal.list_reports_summary().await?;
//! print!("{reports}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod journal;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, ExportTable, OperationStatus, ReportPreview, ReportSummaries,
    UpdateResult,
};
pub use error::{ReportError, Result};
pub use export::{rows_from_reports, ExportRow};
pub use journal::{Journal, JournalBuilder};
pub use models::{
    BulletStyle, GapSettings, Preferences, ReportDocument, ReportSummary, Task, TaskStatus,
    VisibilitySettings,
};
pub use params::{
    CreateReport, DateKey, DeleteReport, EditReport, RangeQuery, TaskCreate, TaskRemove,
    UpdatePreferences,
};
