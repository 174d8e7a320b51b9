//! Request types for editing stored reports.

use jiff::civil::Date;

use super::{BulletStyle, ReportDocument};

/// Validated field changes for editing a stored report.
///
/// Produced from [`crate::params::EditReport`] once the raw strings have
/// been parsed. `apply` mutates a loaded document and reports which fields
/// actually changed, so operation output can list them.
#[derive(Debug, Default)]
pub struct EditReportRequest {
    /// Move the report to a new date key
    pub new_date: Option<Date>,
    /// Replace the author name
    pub name: Option<String>,
    /// Full replacement for the project list
    pub projects: Option<Vec<String>>,
    /// `Some(None)` clears the next task; `None` leaves it unchanged
    pub next_task: Option<Option<String>>,
    /// Replace the top-level bullet style
    pub bullet: Option<BulletStyle>,
    /// Replace the subtask bullet style
    pub sub_icon: Option<BulletStyle>,
    /// Replace the top-level gap
    pub task_gap: Option<u32>,
    /// Replace the subtask gap
    pub subtask_gap: Option<u32>,
}

impl EditReportRequest {
    /// Apply the requested changes to a document.
    ///
    /// Returns a human-readable label for every field that actually changed.
    pub fn apply(&self, doc: &mut ReportDocument) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(date) = self.new_date {
            if date != doc.date {
                changes.push(format!("date: {} -> {}", doc.date, date));
                doc.date = date;
            }
        }
        if let Some(name) = &self.name {
            if name != &doc.name {
                doc.name = name.clone();
                changes.push("name".to_string());
            }
        }
        if let Some(projects) = &self.projects {
            if projects != &doc.projects {
                doc.projects = projects.clone();
                changes.push("projects".to_string());
            }
        }
        if let Some(next) = &self.next_task {
            if next != &doc.next_task {
                doc.next_task = next.clone();
                changes.push("next task".to_string());
            }
        }
        if let Some(bullet) = self.bullet {
            if bullet != doc.bullet {
                doc.bullet = bullet;
                changes.push("bullet style".to_string());
            }
        }
        if let Some(icon) = self.sub_icon {
            if icon != doc.sub_icon {
                doc.sub_icon = icon;
                changes.push("subtask icon".to_string());
            }
        }
        if let Some(gap) = self.task_gap {
            if gap != doc.gaps.task_gap {
                doc.gaps.task_gap = gap;
                changes.push("task gap".to_string());
            }
        }
        if let Some(gap) = self.subtask_gap {
            if gap != doc.gaps.subtask_gap {
                doc.gaps.subtask_gap = gap;
                changes.push("subtask gap".to_string());
            }
        }
        changes
    }
}

impl TryFrom<&crate::params::EditReport> for EditReportRequest {
    type Error = crate::ReportError;

    /// Convert raw edit parameters into a validated request.
    ///
    /// Delegates string parsing and range checks to
    /// [`crate::params::EditReport::validate`]; bullet tags convert totally
    /// (unknown tags fall back to the dash style).
    fn try_from(params: &crate::params::EditReport) -> Result<Self, Self::Error> {
        let (new_date, next_task) = params.validate()?;

        Ok(Self {
            new_date,
            name: params.name.clone(),
            projects: params.projects.clone(),
            next_task,
            bullet: params.bullet.as_deref().map(BulletStyle::from),
            sub_icon: params.sub_icon.as_deref().map(BulletStyle::from),
            task_gap: params.task_gap,
            subtask_gap: params.subtask_gap,
        })
    }
}
