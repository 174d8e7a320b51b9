//! Report formatting functions and result types.
//!
//! This module turns stored report documents into the text surfaces the
//! application exposes: bullet lines, indented task trees, the full report
//! template, export tables, and operation result messages. The same
//! formatting logic backs every output context (terminal, files, MCP), so
//! a report previews identically everywhere.
//!
//! # Architecture: Formatting Layers
//!
//! Formatting is layered bottom-up. Each layer consumes the one below it and
//! nothing reaches back into storage:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ line → tree →   │    │   Formatted     │
//! │ (ReportDocument,│───▶│ document, table │───▶│    Output       │
//! │  Task)          │    │ & result types  │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`line`]: Single task line formatting (ID, title, status, duration)
//! - [`tree`]: Indented task tree assembly with bullet glyphs and gaps
//! - [`document`]: The complete report template ([`ReportPreview`])
//! - [`table`]: Markdown table rendering for exported rows
//! - [`collections`]: Collection wrapper types (ReportSummaries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ### Rendering a report
//!
//! ```rust
//! use worklog_core::{
//!     display::ReportPreview,
//!     models::{ReportDocument, Task, VisibilitySettings},
//! };
//!
//! let mut report = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
//! report.projects = vec!["Rukkor".to_string()];
//! report.tasks = vec![Task::new(1, "Fix login bug")];
//!
//! let visibility = VisibilitySettings::default();
//! let preview = ReportPreview::new(&report, &visibility);
//! let text = format!("{}", preview);
//! assert!(text.starts_with("Today's work update - 2024-03-01"));
//! ```
//!
//! ### Operation Results
//!
//! ```rust
//! use worklog_core::{display::UpdateResult, models::ReportDocument};
//!
//! let report = ReportDocument::new("2024-03-01".parse().unwrap(), "Sam");
//! let changes = vec!["name".to_string()];
//! let result = UpdateResult::new(report, changes);
//! assert!(format!("{}", result).contains("Changes made:"));
//! ```

pub mod collections;
pub mod document;
pub mod line;
pub mod models;
pub mod results;
pub mod table;
pub mod tree;

// Re-export commonly used types for convenience
pub use collections::ReportSummaries;
pub use document::{DEFAULT_CLOSING, ReportPreview};
pub use line::format_task_line;
pub use results::{CreateResult, DeleteResult, OperationStatus, UpdateResult};
pub use table::ExportTable;
pub use tree::{TreeLayout, format_task_tree};
