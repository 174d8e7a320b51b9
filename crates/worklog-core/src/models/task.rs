//! Task model definition and duration derivation.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// A single task entry within a report, optionally carrying subtasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Local ordinal, unique within the surrounding sibling list
    pub id: u64,

    /// External tracker reference (ticket number etc.), rendered as `ID: ...`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    /// Short description of the work done
    pub title: String,

    /// Hours spent (raw, authoritative only while the task has no subtasks)
    #[serde(default)]
    pub hours: u32,

    /// Minutes spent (raw free integer, may exceed 59)
    #[serde(default)]
    pub minutes: u32,

    /// Current status, absent when never set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,

    /// Nested subtasks; one level in normal use, deeper trees render fine
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Task>,
}

impl Task {
    /// Create a task with the given local id and title and everything else
    /// empty.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            task_id: None,
            title: title.into(),
            hours: 0,
            minutes: 0,
            status: None,
            subtasks: Vec::new(),
        }
    }

    /// Effective duration as an `(hours, minutes)` pair.
    ///
    /// A leaf task reports its own raw fields untouched, so stored minutes
    /// beyond 59 pass through as entered. A task with subtasks ignores its
    /// own fields and reports the subtask sum normalized to hours+minutes
    /// (105min + 30min becomes `(2, 15)`).
    pub fn effective_duration(&self) -> (u32, u32) {
        if self.subtasks.is_empty() {
            (self.hours, self.minutes)
        } else {
            let total = self.subtask_minutes();
            (total / 60, total % 60)
        }
    }

    /// Effective duration collapsed to total minutes.
    pub fn total_minutes(&self) -> u32 {
        if self.subtasks.is_empty() {
            self.hours * 60 + self.minutes
        } else {
            self.subtask_minutes()
        }
    }

    fn subtask_minutes(&self) -> u32 {
        self.subtasks.iter().map(Task::total_minutes).sum()
    }
}

/// Recursively search a task tree for the task with the given local id.
///
/// Local ids are only unique within one sibling list, so this returns the
/// first match in document order; callers addressing subtasks pass the parent
/// id instead and search the parent's own list.
pub(crate) fn find_task_mut(tasks: &mut [Task], id: u64) -> Option<&mut Task> {
    for task in tasks.iter_mut() {
        if task.id == id {
            return Some(task);
        }
        if let Some(found) = find_task_mut(&mut task.subtasks, id) {
            return Some(found);
        }
    }
    None
}
