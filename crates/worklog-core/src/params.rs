//! Parameter structures for worklog operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives
//! or dependencies. These structures provide a clean interface for passing
//! data between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and
//! interface-specific frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Dates cross this boundary as strings and are parsed exactly once, here.
//! Report keys and edit targets use the `YYYY-MM-DD` entry format and reject
//! anything else; range queries use the `DD/MM/YYYY` entry format and treat
//! unparseable bounds as selecting nothing. The typed [`jiff::civil::Date`]
//! only exists past validation, so the store and formatters never see a raw
//! date string.
//!
//! ### Usage Pattern
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Convert to core parameters via `From` implementations
//! - Call `validate()` before handing the parameters to a
//!   [`crate::journal::Journal`] operation
//!
//! ```ignore
//! // In CLI module
//! #[derive(Args)]
//! pub struct CreateReportArgs {
//!     pub date: Option<String>,
//!     // ... clap-specific attributes
//! }
//!
//! impl From<CreateReportArgs> for CreateReport {
//!     fn from(args: CreateReportArgs) -> Self {
//!         CreateReport {
//!             date: args.date,
//!             ..Default::default()
//!         }
//!     }
//! }
//! ```

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Preferences, TaskStatus};
use crate::{ReportError, Result};

/// Parse a `YYYY-MM-DD` date field, naming the field in the error.
pub(crate) fn parse_date_field(field: &str, value: &str) -> Result<Date> {
    value.trim().parse().map_err(|_| {
        ReportError::invalid_input(field, format!("expected a YYYY-MM-DD date, got '{value}'"))
    })
}

/// Parse one `DD/MM/YYYY` range bound, `None` when invalid.
fn parse_range_bound(value: &str) -> Option<Date> {
    Date::strptime("%d/%m/%Y", value.trim()).ok()
}

fn check_gap(field: &str, value: Option<u32>) -> Result<()> {
    if value == Some(0) {
        return Err(ReportError::invalid_input(
            field,
            "gap values must be at least 1",
        ));
    }
    Ok(())
}

/// Generic parameters for operations addressing one stored report.
///
/// Used for operations like show_report, delete_report and export that only
/// need the date key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DateKey {
    /// Date of the report to operate on, in YYYY-MM-DD format
    pub date: String,
}

impl DateKey {
    /// Parse the date key into a typed date.
    pub fn parse(&self) -> Result<Date> {
        parse_date_field("date", &self.date)
    }
}

/// Parameters for creating a new report.
///
/// Fields left unset fall back to the stored preferences (author name,
/// bullet styles, gaps); the date falls back to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateReport {
    /// Date of the report in YYYY-MM-DD format; today when omitted
    pub date: Option<String>,
    /// Author name printed under the closing line
    pub name: Option<String>,
    /// Project names joined into the header line
    #[serde(default)]
    pub projects: Vec<String>,
    /// Planned next task shown in the footer block
    pub next_task: Option<String>,
    /// Bullet style tag for top-level tasks ('bullet', 'dot', 'number', ...)
    pub bullet: Option<String>,
    /// Bullet style tag for subtask levels
    pub sub_icon: Option<String>,
    /// Newline count between rendered task blocks (minimum 1)
    pub task_gap: Option<u32>,
    /// Newline count between rendered subtask blocks (minimum 1)
    pub subtask_gap: Option<u32>,
    /// Replace an existing report under the same date instead of failing
    #[serde(default)]
    pub overwrite: bool,
}

impl CreateReport {
    /// Validate creation parameters and return the parsed date, if one was
    /// given.
    ///
    /// # Errors
    ///
    /// * `ReportError::InvalidInput` - When the date string is not a valid
    ///   YYYY-MM-DD date or a gap value is zero
    pub fn validate(&self) -> Result<Option<Date>> {
        check_gap("task_gap", self.task_gap)?;
        check_gap("subtask_gap", self.subtask_gap)?;
        self.date
            .as_deref()
            .map(|value| parse_date_field("date", value))
            .transpose()
    }
}

/// Parameters for editing an existing report.
///
/// Allows partial updates to report metadata. Setting `new_date` moves the
/// report to a different date key; the old key is removed in the same
/// transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EditReport {
    /// Date of the report to edit, in YYYY-MM-DD format (required)
    pub date: String,
    /// New date key in YYYY-MM-DD format, moving the report
    pub new_date: Option<String>,
    /// Updated author name
    pub name: Option<String>,
    /// Full replacement for the project list
    pub projects: Option<Vec<String>>,
    /// Updated next task text
    pub next_task: Option<String>,
    /// Clear the next task entirely; takes precedence over `next_task`
    #[serde(default)]
    pub clear_next_task: bool,
    /// Updated bullet style tag for top-level tasks
    pub bullet: Option<String>,
    /// Updated bullet style tag for subtask levels
    pub sub_icon: Option<String>,
    /// Updated newline count between task blocks (minimum 1)
    pub task_gap: Option<u32>,
    /// Updated newline count between subtask blocks (minimum 1)
    pub subtask_gap: Option<u32>,
}

impl EditReport {
    /// Parse the date key of the report being edited.
    pub fn key(&self) -> Result<Date> {
        parse_date_field("date", &self.date)
    }

    /// Validate edit parameters and return the parsed new date and next-task
    /// change.
    ///
    /// The second element uses the double-`Option` convention: `None` leaves
    /// the next task untouched, `Some(None)` clears it, `Some(Some(_))`
    /// replaces it.
    ///
    /// # Errors
    ///
    /// * `ReportError::InvalidInput` - When `new_date` is not a valid
    ///   YYYY-MM-DD date or a gap value is zero
    pub fn validate(&self) -> Result<(Option<Date>, Option<Option<String>>)> {
        check_gap("task_gap", self.task_gap)?;
        check_gap("subtask_gap", self.subtask_gap)?;

        let new_date = self
            .new_date
            .as_deref()
            .map(|value| parse_date_field("new_date", value))
            .transpose()?;

        let next_task = if self.clear_next_task {
            Some(None)
        } else {
            self.next_task.clone().map(Some)
        };

        Ok((new_date, next_task))
    }
}

/// Parameters for deleting a report.
///
/// Deletion requires explicit confirmation so a mistyped date cannot drop a
/// day's work silently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteReport {
    /// Date of the report to delete, in YYYY-MM-DD format
    pub date: String,
    /// Must be true for the deletion to proceed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for selecting reports within an inclusive date range.
///
/// Range bounds use the DD/MM/YYYY entry format. Bounds that do not parse
/// select nothing rather than failing, so a bad range can never leak every
/// stored report into an export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RangeQuery {
    /// Inclusive start of the range, in DD/MM/YYYY format
    pub start: String,
    /// Inclusive end of the range, in DD/MM/YYYY format
    pub end: String,
}

impl RangeQuery {
    /// Parse both bounds, returning `None` when either is invalid.
    pub fn bounds(&self) -> Option<(Date, Date)> {
        let start = parse_range_bound(&self.start)?;
        let end = parse_range_bound(&self.end)?;
        Some((start, end))
    }
}

/// Parameters for adding a task to a stored report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskCreate {
    /// Date of the report to add the task to, in YYYY-MM-DD format
    pub date: String,
    /// Local id of the parent task; top level when omitted
    pub parent: Option<u64>,
    /// Short description of the work (required)
    pub title: String,
    /// External tracker reference, rendered as the `ID:` prefix
    pub task_id: Option<String>,
    /// Hours spent on the task
    #[serde(default)]
    pub hours: u32,
    /// Minutes spent; a free integer, values beyond 59 stay as entered
    #[serde(default)]
    pub minutes: u32,
    /// Task status ('pending', 'inprogress', 'completed' or 'onhold')
    pub status: Option<String>,
}

impl TaskCreate {
    /// Validate task parameters and return the parsed date and status.
    ///
    /// # Errors
    ///
    /// * `ReportError::InvalidInput` - When the date is not a valid
    ///   YYYY-MM-DD date, the title is blank, or the status string is not a
    ///   known status
    pub fn validate(&self) -> Result<(Date, Option<TaskStatus>)> {
        let date = parse_date_field("date", &self.date)?;

        if self.title.trim().is_empty() {
            return Err(ReportError::invalid_input(
                "title",
                "title must not be empty",
            ));
        }

        let status = match &self.status {
            Some(raw) => Some(raw.parse::<TaskStatus>().map_err(|_| {
                ReportError::invalid_input(
                    "status",
                    format!(
                        "Invalid status: {raw}. Must be 'pending', 'inprogress', 'completed' or 'onhold'"
                    ),
                )
            })?),
            None => None,
        };

        Ok((date, status))
    }
}

/// Parameters for removing a task from a stored report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRemove {
    /// Date of the report to remove the task from, in YYYY-MM-DD format
    pub date: String,
    /// Local id of the parent task; top level when omitted
    pub parent: Option<u64>,
    /// Local id of the task to remove
    pub id: u64,
}

/// Parameters for updating the persisted preferences.
///
/// Every field is optional; unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePreferences {
    /// Default author name for new reports
    pub name: Option<String>,
    /// Closing line printed above the name
    pub closing: Option<String>,
    /// Default bullet style tag for top-level tasks
    pub bullet: Option<String>,
    /// Default bullet style tag for subtask levels
    pub sub_icon: Option<String>,
    /// Default newline count between task blocks (minimum 1)
    pub task_gap: Option<u32>,
    /// Default newline count between subtask blocks (minimum 1)
    pub subtask_gap: Option<u32>,
    /// Show the `ID:` prefix in rendered lines
    pub show_id: Option<bool>,
    /// Show the status parenthetical in rendered lines
    pub show_status: Option<bool>,
    /// Show the duration parenthetical in rendered lines
    pub show_hours: Option<bool>,
    /// Show the `Next's Tasks` footer block
    pub show_next_task: Option<bool>,
}

impl UpdatePreferences {
    /// Validate the preference changes.
    ///
    /// # Errors
    ///
    /// * `ReportError::InvalidInput` - When a gap value is zero
    pub fn validate(&self) -> Result<()> {
        check_gap("task_gap", self.task_gap)?;
        check_gap("subtask_gap", self.subtask_gap)
    }

    /// Apply the provided fields to a preference record.
    ///
    /// Returns a human-readable label for every field that actually changed.
    pub fn apply(&self, prefs: &mut Preferences) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            if name != &prefs.name {
                prefs.name = name.clone();
                changes.push("name".to_string());
            }
        }
        if let Some(closing) = &self.closing {
            if closing != &prefs.closing {
                prefs.closing = closing.clone();
                changes.push("closing".to_string());
            }
        }
        if let Some(tag) = self.bullet.as_deref() {
            let bullet = tag.into();
            if bullet != prefs.bullet {
                prefs.bullet = bullet;
                changes.push("bullet style".to_string());
            }
        }
        if let Some(tag) = self.sub_icon.as_deref() {
            let icon = tag.into();
            if icon != prefs.sub_icon {
                prefs.sub_icon = icon;
                changes.push("subtask icon".to_string());
            }
        }
        if let Some(gap) = self.task_gap {
            if gap != prefs.gaps.task_gap {
                prefs.gaps.task_gap = gap;
                changes.push("task gap".to_string());
            }
        }
        if let Some(gap) = self.subtask_gap {
            if gap != prefs.gaps.subtask_gap {
                prefs.gaps.subtask_gap = gap;
                changes.push("subtask gap".to_string());
            }
        }
        if let Some(show) = self.show_id {
            if show != prefs.visibility.show_id {
                prefs.visibility.show_id = show;
                changes.push("show id".to_string());
            }
        }
        if let Some(show) = self.show_status {
            if show != prefs.visibility.show_status {
                prefs.visibility.show_status = show;
                changes.push("show status".to_string());
            }
        }
        if let Some(show) = self.show_hours {
            if show != prefs.visibility.show_hours {
                prefs.visibility.show_hours = show;
                changes.push("show hours".to_string());
            }
        }
        if let Some(show) = self.show_next_task {
            if show != prefs.visibility.show_next_task {
                prefs.visibility.show_next_task = show;
                changes.push("show next task".to_string());
            }
        }
        changes
    }
}
