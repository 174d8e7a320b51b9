//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! This module demonstrates the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! ### Design Benefits
//!
//! 1. **Framework Isolation**: Core parameter types remain free of
//!    clap-specific attributes and derives, enabling reuse across different
//!    interfaces.
//!
//! 2. **Validation Separation**: CLI-specific validation (argument parsing,
//!    help generation) is handled by clap derives, while business logic
//!    validation (date formats, gap minimums, status strings) remains in the
//!    core domain.
//!
//! 3. **Interface Evolution**: CLI can evolve its argument structure (aliases,
//!    help text, validation) without affecting core parameter definitions.
//!
//! ### Implementation Pattern
//!
//! Each command follows this structure:
//!
//! ```rust
//! // CLI-specific argument structure with clap derives
//! #[derive(Args)]
//! pub struct OperationArgs {
//!     pub field: String,
//!     #[arg(short, long)] // CLI-specific attributes
//!     pub optional_field: Option<String>,
//! }
//!
//! // Conversion to core parameters
//! impl From<OperationArgs> for CoreOperationParams {
//!     fn from(val: OperationArgs) -> Self {
//!         CoreOperationParams {
//!             field: val.field,
//!             optional_field: val.optional_field,
//!         }
//!     }
//! }
//! ```
//!
//! This pattern ensures that:
//! - CLI concerns (help text, argument validation) stay in CLI layer
//! - Core types remain interface-agnostic
//! - Type conversion is explicit and verifiable at compile time
//!
//! The [`Cli`] struct at the bottom of this module pairs a
//! [`worklog_core::Journal`] with a [`TerminalRenderer`] and executes the
//! parsed commands. The report preview is printed verbatim; everything else
//! goes through the markdown skin.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use worklog_core::{
    display::{CreateResult, DeleteResult, ExportTable, OperationStatus, UpdateResult},
    params::{
        CreateReport, DateKey, DeleteReport, EditReport, RangeQuery, TaskCreate, TaskRemove,
        UpdatePreferences,
    },
    ExportRow, Journal,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// These structures implement the CLI side of the parameter wrapper pattern.
// Each wrapper:
// 1. Defines CLI-specific argument parsing with clap derives
// 2. Provides a From conversion to the core parameter type
// 3. Isolates clap framework concerns from core domain logic
//
// The From implementations perform explicit type conversion, ensuring
// compile-time verification of parameter mapping between CLI and core layers.

/// Create a new report
///
/// CLI wrapper for CreateReport that adds clap-specific argument handling
/// including short/long flags, help text generation, and input validation.
/// Fields left unset fall back to the stored preferences; the date falls
/// back to today.
#[derive(Args)]
pub struct CreateReportArgs {
    /// Date of the report in YYYY-MM-DD format; today when omitted
    pub date: Option<String>,
    /// Author name printed under the closing line
    #[arg(short, long, help = "Author name printed under the closing line")]
    pub name: Option<String>,
    /// Project names for the header line
    #[arg(
        short,
        long = "project",
        value_name = "PROJECT",
        help = "Project name for the header line; repeat the flag for several"
    )]
    pub projects: Vec<String>,
    /// Planned next task shown in the footer block
    #[arg(long, help = "Planned next task shown in the footer block")]
    pub next_task: Option<String>,
    /// Bullet style tag for top-level tasks
    #[arg(
        short,
        long,
        help = "Bullet style tag for top-level tasks (bullet, dot, number, star, ...)"
    )]
    pub bullet: Option<String>,
    /// Bullet style tag for subtask levels
    #[arg(long, help = "Bullet style tag for subtask levels")]
    pub sub_icon: Option<String>,
    /// Newline count between rendered task blocks
    #[arg(long, help = "Newline count between rendered task blocks (minimum 1)")]
    pub task_gap: Option<u32>,
    /// Newline count between rendered subtask blocks
    #[arg(long, help = "Newline count between rendered subtask blocks (minimum 1)")]
    pub subtask_gap: Option<u32>,
    /// Replace an existing report stored under the same date
    #[arg(long, help = "Replace an existing report stored under the same date")]
    pub overwrite: bool,
}

impl From<CreateReportArgs> for CreateReport {
    fn from(val: CreateReportArgs) -> Self {
        CreateReport {
            date: val.date,
            name: val.name,
            projects: val.projects,
            next_task: val.next_task,
            bullet: val.bullet,
            sub_icon: val.sub_icon,
            task_gap: val.task_gap,
            subtask_gap: val.subtask_gap,
            overwrite: val.overwrite,
        }
    }
}

/// Show the shareable preview of a stored report
///
/// Renders the full report template (header, project line, task tree,
/// next-task block and closing) exactly as it should be pasted into a chat
/// or mail. Output is never styled, so it can be piped or copied as-is.
#[derive(Args)]
pub struct ShowReportArgs {
    /// Date of the report to show, in YYYY-MM-DD format
    #[arg(help = "Date key of the report to render, in YYYY-MM-DD format")]
    pub date: String,
}

impl From<ShowReportArgs> for DateKey {
    fn from(val: ShowReportArgs) -> Self {
        DateKey { date: val.date }
    }
}

/// Edit a stored report
///
/// Applies partial updates to report metadata. Setting --new-date moves the
/// report to a different date key; the old key is removed in the same
/// transaction. Moving onto a date that already holds another report is
/// rejected.
#[derive(Args)]
pub struct EditReportArgs {
    /// Date of the report to edit, in YYYY-MM-DD format
    #[arg(help = "Date key of the report to edit, in YYYY-MM-DD format")]
    pub date: String,
    /// Move the report to a new date key
    #[arg(
        long,
        value_name = "DATE",
        help = "Move the report to a new YYYY-MM-DD date key"
    )]
    pub new_date: Option<String>,
    /// Updated author name
    #[arg(short, long, help = "Updated author name")]
    pub name: Option<String>,
    /// Full replacement for the project list
    #[arg(
        short,
        long = "project",
        value_name = "PROJECT",
        help = "Replacement project name; repeat the flag for several"
    )]
    pub projects: Option<Vec<String>>,
    /// Updated next task text
    #[arg(long, help = "Updated next task text")]
    pub next_task: Option<String>,
    /// Clear the next task entirely
    #[arg(long, help = "Clear the next task entirely")]
    pub clear_next_task: bool,
    /// Updated bullet style tag for top-level tasks
    #[arg(short, long, help = "Updated bullet style tag for top-level tasks")]
    pub bullet: Option<String>,
    /// Updated bullet style tag for subtask levels
    #[arg(long, help = "Updated bullet style tag for subtask levels")]
    pub sub_icon: Option<String>,
    /// Updated newline count between task blocks
    #[arg(long, help = "Updated newline count between task blocks (minimum 1)")]
    pub task_gap: Option<u32>,
    /// Updated newline count between subtask blocks
    #[arg(long, help = "Updated newline count between subtask blocks (minimum 1)")]
    pub subtask_gap: Option<u32>,
}

impl From<EditReportArgs> for EditReport {
    fn from(val: EditReportArgs) -> Self {
        EditReport {
            date: val.date,
            new_date: val.new_date,
            name: val.name,
            projects: val.projects,
            next_task: val.next_task,
            clear_next_task: val.clear_next_task,
            bullet: val.bullet,
            sub_icon: val.sub_icon,
            task_gap: val.task_gap,
            subtask_gap: val.subtask_gap,
        }
    }
}

/// Delete a report permanently
#[derive(Args)]
pub struct DeleteReportArgs {
    /// Date of the report to delete, in YYYY-MM-DD format
    #[arg(help = "Date key of the report to permanently delete")]
    pub date: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteReportArgs> for DeleteReport {
    fn from(val: DeleteReportArgs) -> Self {
        DeleteReport {
            date: val.date,
            confirmed: val.confirm,
        }
    }
}

/// List reports within an inclusive date range
///
/// Range bounds use the DD/MM/YYYY entry format. Bounds that do not parse
/// select nothing, so a mistyped range lists no reports rather than all of
/// them.
#[derive(Args)]
pub struct RangeArgs {
    /// Inclusive start of the range, in DD/MM/YYYY format
    #[arg(help = "Inclusive start of the range, in DD/MM/YYYY format")]
    pub start: String,
    /// Inclusive end of the range, in DD/MM/YYYY format
    #[arg(help = "Inclusive end of the range, in DD/MM/YYYY format")]
    pub end: String,
}

impl From<RangeArgs> for RangeQuery {
    fn from(val: RangeArgs) -> Self {
        RangeQuery {
            start: val.start,
            end: val.end,
        }
    }
}

/// Export tasks in a date range
///
/// Flattens every report in the range into rows (one per task and one per
/// subtask, chronological). Without --csv the rows print as a markdown
/// table; with --csv they are written to the given file.
#[derive(Args)]
pub struct ExportArgs {
    /// Inclusive start of the range, in DD/MM/YYYY format
    #[arg(help = "Inclusive start of the range, in DD/MM/YYYY format")]
    pub start: String,
    /// Inclusive end of the range, in DD/MM/YYYY format
    #[arg(help = "Inclusive end of the range, in DD/MM/YYYY format")]
    pub end: String,
    /// Write the rows to a CSV file instead of printing a table
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,
}

impl From<ExportArgs> for RangeQuery {
    fn from(val: ExportArgs) -> Self {
        RangeQuery {
            start: val.start,
            end: val.end,
        }
    }
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Create a new report
    #[command(alias = "c")]
    Create(CreateReportArgs),
    /// List all stored reports
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show the shareable preview of a report
    #[command(alias = "s")]
    Show(ShowReportArgs),
    /// Edit a stored report
    #[command(alias = "e")]
    Edit(EditReportArgs),
    /// Delete a report permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteReportArgs),
}

/// Add a task or subtask to a stored report
///
/// Example of wrapper pattern with more complex parameter mapping, showing
/// how CLI-specific features (value enums, defaults) can be added without
/// affecting the core parameter structure.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Date of the report to add the task to, in YYYY-MM-DD format
    #[arg(help = "Date key of the report to add the task to")]
    pub date: String,
    /// Short description of the work
    pub title: String,
    /// Local id of the parent task; top level when omitted
    #[arg(
        short,
        long,
        help = "Local id of the parent task; the task is top-level when omitted"
    )]
    pub parent: Option<u64>,
    /// External tracker reference, rendered as the `ID:` prefix
    #[arg(
        long = "id",
        value_name = "TASK_ID",
        help = "External tracker reference, rendered as the 'ID:' line prefix"
    )]
    pub task_id: Option<String>,
    /// Hours spent on the task
    #[arg(long, default_value_t = 0, help = "Hours spent on the task")]
    pub hours: u32,
    /// Minutes spent on the task
    #[arg(long, default_value_t = 0, help = "Minutes spent on the task")]
    pub minutes: u32,
    /// Task status
    #[arg(
        short,
        long,
        help = "Task status (pending, in-progress, completed, on-hold)"
    )]
    pub status: Option<TaskStatusArg>,
}

impl From<AddTaskArgs> for TaskCreate {
    /// Convert CLI arguments to core TaskCreate
    ///
    /// The status value enum is converted back to the string form the core
    /// validates, keeping the status vocabulary in one place.
    fn from(val: AddTaskArgs) -> Self {
        TaskCreate {
            date: val.date,
            parent: val.parent,
            title: val.title,
            task_id: val.task_id,
            hours: val.hours,
            minutes: val.minutes,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Remove a task from a stored report
///
/// Removes the addressed task and any subtasks it carries. Sibling ids are
/// not renumbered, so other tasks keep their addresses.
#[derive(Args)]
pub struct RemoveTaskArgs {
    /// Date of the report to remove the task from, in YYYY-MM-DD format
    #[arg(help = "Date key of the report to remove the task from")]
    pub date: String,
    /// Local id of the task to remove
    #[arg(help = "Local id of the task to remove")]
    pub id: u64,
    /// Local id of the parent task; top level when omitted
    #[arg(
        short,
        long,
        help = "Local id of the parent task; the task is looked up top-level when omitted"
    )]
    pub parent: Option<u64>,
}

impl From<RemoveTaskArgs> for TaskRemove {
    fn from(val: RemoveTaskArgs) -> Self {
        TaskRemove {
            date: val.date,
            parent: val.parent,
            id: val.id,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task or subtask to a report
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Remove a task from a report
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveTaskArgs),
}

/// Change one or more preference fields
///
/// Every flag is optional; unset fields keep their stored value. The
/// preferences seed new reports and control preview visibility, so changes
/// apply to every later render.
#[derive(Args)]
pub struct SetPrefsArgs {
    /// Default author name for new reports
    #[arg(long, help = "Default author name for new reports")]
    pub name: Option<String>,
    /// Closing line printed above the name
    #[arg(long, help = "Closing line printed above the name")]
    pub closing: Option<String>,
    /// Default bullet style tag for top-level tasks
    #[arg(long, help = "Default bullet style tag for top-level tasks")]
    pub bullet: Option<String>,
    /// Default bullet style tag for subtask levels
    #[arg(long, help = "Default bullet style tag for subtask levels")]
    pub sub_icon: Option<String>,
    /// Default newline count between task blocks
    #[arg(long, help = "Default newline count between task blocks (minimum 1)")]
    pub task_gap: Option<u32>,
    /// Default newline count between subtask blocks
    #[arg(long, help = "Default newline count between subtask blocks (minimum 1)")]
    pub subtask_gap: Option<u32>,
    /// Show the `ID:` prefix in rendered lines
    #[arg(long, value_name = "BOOL", help = "Show the 'ID:' prefix in rendered lines")]
    pub show_id: Option<bool>,
    /// Show the status parenthetical in rendered lines
    #[arg(
        long,
        value_name = "BOOL",
        help = "Show the status parenthetical in rendered lines"
    )]
    pub show_status: Option<bool>,
    /// Show the duration parenthetical in rendered lines
    #[arg(
        long,
        value_name = "BOOL",
        help = "Show the duration parenthetical in rendered lines"
    )]
    pub show_hours: Option<bool>,
    /// Show the next-task footer block
    #[arg(long, value_name = "BOOL", help = "Show the next-task footer block")]
    pub show_next_task: Option<bool>,
}

impl From<SetPrefsArgs> for UpdatePreferences {
    fn from(val: SetPrefsArgs) -> Self {
        UpdatePreferences {
            name: val.name,
            closing: val.closing,
            bullet: val.bullet,
            sub_icon: val.sub_icon,
            task_gap: val.task_gap,
            subtask_gap: val.subtask_gap,
            show_id: val.show_id,
            show_status: val.show_status,
            show_hours: val.show_hours,
            show_next_task: val.show_next_task,
        }
    }
}

#[derive(Subcommand)]
pub enum PrefsCommands {
    /// Show the persisted preferences
    #[command(alias = "s")]
    Show,
    /// Change one or more preference fields
    Set(SetPrefsArgs),
}

/// Command-line argument representation of task status values
///
/// This enum provides the CLI interface for task statuses, converting
/// between user-friendly command arguments and the status strings the core
/// validates. Used with the `--status` flag when adding tasks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TaskStatusArg {
    /// Work not started yet
    Pending,
    /// Work currently underway
    InProgress,
    /// Work finished
    Completed,
    /// Work paused or blocked
    OnHold,
}

impl std::fmt::Display for TaskStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatusArg::Pending => write!(f, "pending"),
            TaskStatusArg::InProgress => write!(f, "inprogress"),
            TaskStatusArg::Completed => write!(f, "completed"),
            TaskStatusArg::OnHold => write!(f, "onhold"),
        }
    }
}

// ============================================================================
// Command execution
// ============================================================================

/// Executes parsed commands against a journal and renders the results.
pub struct Cli {
    journal: Journal,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Pair a journal with a terminal renderer.
    pub fn new(journal: Journal, renderer: TerminalRenderer) -> Self {
        Self { journal, renderer }
    }

    /// Dispatch a report subcommand.
    pub async fn handle_report_command(&self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::Create(args) => self.create_report(args).await,
            ReportCommands::List => self.list_reports().await,
            ReportCommands::Show(args) => self.show_report(args).await,
            ReportCommands::Edit(args) => self.edit_report(args).await,
            ReportCommands::Delete(args) => self.delete_report(args).await,
        }
    }

    /// Dispatch a task subcommand.
    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => self.add_task(args).await,
            TaskCommands::Remove(args) => self.remove_task(args).await,
        }
    }

    /// Dispatch a preferences subcommand.
    pub async fn handle_prefs_command(&self, command: PrefsCommands) -> Result<()> {
        match command {
            PrefsCommands::Show => self.show_prefs().await,
            PrefsCommands::Set(args) => self.set_prefs(args).await,
        }
    }

    /// List all stored reports as summaries. Also the default action when
    /// the binary runs without a command.
    pub async fn list_reports(&self) -> Result<()> {
        let summaries = self.journal.list_reports_summary().await?;
        self.renderer.render(&format!("# Reports\n\n{summaries}"))
    }

    /// List reports whose dates fall within an inclusive range.
    pub async fn handle_range(&self, args: RangeArgs) -> Result<()> {
        let params: RangeQuery = args.into();
        let summaries = self.journal.filter_reports_summary(&params).await?;
        self.renderer.render(&format!(
            "# Reports from {} to {}\n\n{summaries}",
            params.start, params.end
        ))
    }

    /// Export the tasks in a range as a markdown table or a CSV file.
    pub async fn handle_export(&self, args: ExportArgs) -> Result<()> {
        let csv_path = args.csv.clone();
        let params: RangeQuery = args.into();
        let rows = self.journal.export_rows(&params).await?;

        match csv_path {
            Some(path) => {
                write_csv(&path, &rows)?;
                let noun = if rows.len() == 1 { "row" } else { "rows" };
                let status = OperationStatus::success(format!(
                    "Exported {} {noun} to {}",
                    rows.len(),
                    path.display()
                ));
                self.renderer.render(&status.to_string())
            }
            None => self.renderer.render(&ExportTable::new(&rows).to_string()),
        }
    }

    async fn create_report(&self, args: CreateReportArgs) -> Result<()> {
        let params: CreateReport = args.into();
        let report = self.journal.create_report(&params).await?;
        self.renderer
            .render(&CreateResult::new(report).to_string())
    }

    async fn show_report(&self, args: ShowReportArgs) -> Result<()> {
        let params: DateKey = args.into();
        match self.journal.show_report_preview(&params).await? {
            Some(preview) => self.renderer.render_raw(&preview),
            None => bail!("No report found for {}", params.date),
        }
    }

    async fn edit_report(&self, args: EditReportArgs) -> Result<()> {
        let params: EditReport = args.into();
        let (report, changes) = self.journal.edit_report(&params).await?;
        self.renderer
            .render(&UpdateResult::new(report, changes).to_string())
    }

    async fn delete_report(&self, args: DeleteReportArgs) -> Result<()> {
        let params: DeleteReport = args.into();
        if !params.confirmed {
            let status = OperationStatus::failure(format!(
                "Deletion is permanent. Re-run with --confirm to delete the report for {}.",
                params.date
            ));
            return self.renderer.render(&status.to_string());
        }

        match self.journal.delete_report(&params).await? {
            Some(report) => self
                .renderer
                .render(&DeleteResult::new(report).to_string()),
            None => bail!("No report found for {}", params.date),
        }
    }

    async fn add_task(&self, args: AddTaskArgs) -> Result<()> {
        let params: TaskCreate = args.into();
        let (id, report) = self.journal.add_task_to_report(&params).await?;
        let status = OperationStatus::success(format!(
            "Added task {id} to the report for {}",
            report.date
        ));
        self.renderer.render(&status.to_string())
    }

    async fn remove_task(&self, args: RemoveTaskArgs) -> Result<()> {
        let params: TaskRemove = args.into();
        let (removed, report) = self.journal.remove_task_from_report(&params).await?;
        let status = OperationStatus::success(format!(
            "Removed task {} '{}' from the report for {}",
            removed.id, removed.title, report.date
        ));
        self.renderer.render(&status.to_string())
    }

    async fn show_prefs(&self) -> Result<()> {
        let prefs = self.journal.preferences().await?;
        self.renderer.render(&format!("# Preferences\n\n{prefs}"))
    }

    async fn set_prefs(&self, args: SetPrefsArgs) -> Result<()> {
        let params: UpdatePreferences = args.into();
        let (prefs, changes) = self.journal.update_preferences(&params).await?;

        if changes.is_empty() {
            let status = OperationStatus::success("No preference changes provided");
            return self.renderer.render(&status.to_string());
        }

        let status = OperationStatus::success(format!("Updated {}", changes.join(", ")));
        self.renderer
            .render(&format!("{status}\n# Preferences\n\n{prefs}"))
    }
}

/// Write export rows to a CSV file with the same columns as the table sink.
fn write_csv(path: &Path, rows: &[ExportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["Date", "ID", "Task", "Status", "Time"])?;
    for row in rows {
        writer.write_record([&row.date, &row.id, &row.title, &row.status, &row.duration])?;
    }
    writer.flush()?;
    Ok(())
}
