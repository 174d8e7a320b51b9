//! Report document model and task tree editing.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::settings::default_sub_icon;
use super::task::find_task_mut;
use super::{BulletStyle, GapSettings, Task};
use crate::error::{ReportError, Result};

/// The saved, date-keyed unit of one day's task list plus its metadata.
///
/// Documents are validated at the store boundary: a payload that does not
/// deserialize into this shape is rejected at load time instead of flowing
/// into the formatters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDocument {
    /// Calendar date the report covers; unique key within the store
    pub date: Date,

    /// Top-level tasks in entry order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,

    /// Selected project names, insertion order kept for display
    #[serde(default)]
    pub projects: Vec<String>,

    /// Author name printed under the closing line
    pub name: String,

    /// Planned next task, shown in the footer block when visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_task: Option<String>,

    /// Bullet style for top-level tasks
    #[serde(default)]
    pub bullet: BulletStyle,

    /// Bullet style applied to subtask levels
    #[serde(default = "default_sub_icon")]
    pub sub_icon: BulletStyle,

    /// Newline spacing between rendered sibling blocks
    #[serde(default)]
    pub gaps: GapSettings,
}

impl ReportDocument {
    /// Create an empty report for the given date and author with default
    /// styles and gaps.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            tasks: Vec::new(),
            projects: Vec::new(),
            name: name.into(),
            next_task: None,
            bullet: BulletStyle::default(),
            sub_icon: default_sub_icon(),
            gaps: GapSettings::default(),
        }
    }

    /// Check the fields required for a save: a non-blank author name and at
    /// least one non-blank project.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ReportError::invalid_input("name", "name must not be empty"));
        }
        if !self.projects.iter().any(|p| !p.trim().is_empty()) {
            return Err(ReportError::invalid_input(
                "projects",
                "at least one project must be selected",
            ));
        }
        if self.gaps.task_gap < 1 || self.gaps.subtask_gap < 1 {
            return Err(ReportError::invalid_input(
                "gaps",
                "gap values must be at least 1",
            ));
        }
        Ok(())
    }

    /// Append a task at the top level, or under the task with the given
    /// local id, assigning the next free sibling id. Returns the new id.
    pub fn add_task(&mut self, parent: Option<u64>, mut task: Task) -> Result<u64> {
        let date = self.date;
        let siblings = match parent {
            None => &mut self.tasks,
            Some(pid) => {
                let parent_task = find_task_mut(&mut self.tasks, pid)
                    .ok_or(ReportError::TaskNotFound { date, id: pid })?;
                &mut parent_task.subtasks
            }
        };
        let id = siblings.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        task.id = id;
        siblings.push(task);
        Ok(id)
    }

    /// Remove the task with the given local id from the addressed sibling
    /// list (the top level when `parent` is `None`) and return it.
    pub fn remove_task(&mut self, parent: Option<u64>, id: u64) -> Result<Task> {
        let date = self.date;
        let siblings = match parent {
            None => &mut self.tasks,
            Some(pid) => {
                let parent_task = find_task_mut(&mut self.tasks, pid)
                    .ok_or(ReportError::TaskNotFound { date, id: pid })?;
                &mut parent_task.subtasks
            }
        };
        let index = siblings
            .iter()
            .position(|t| t.id == id)
            .ok_or(ReportError::TaskNotFound { date, id })?;
        Ok(siblings.remove(index))
    }

    /// Total effective minutes across all top-level tasks.
    pub fn total_minutes(&self) -> u32 {
        self.tasks.iter().map(Task::total_minutes).sum()
    }
}
