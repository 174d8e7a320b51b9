//! Single-line task formatting.

use crate::models::{Task, VisibilitySettings};

/// Render one task into its single report line, without bullet or indent.
///
/// The line is built by concatenation in fixed order: tracker-id prefix,
/// trimmed title, status parenthetical, duration parenthetical. Fields
/// disabled by `visibility` or absent from the task simply do not appear;
/// an empty title still renders, leaving only its annotations. Nothing
/// here can fail.
pub fn format_task_line(task: &Task, visibility: &VisibilitySettings) -> String {
    let mut line = String::new();

    if visibility.show_id {
        if let Some(task_id) = &task.task_id {
            let trimmed = task_id.trim();
            if !trimmed.is_empty() {
                line.push_str("ID: ");
                line.push_str(trimmed);
                line.push_str(" - ");
            }
        }
    }

    line.push_str(task.title.trim());

    if visibility.show_status {
        if let Some(status) = task.status {
            line.push_str(" (");
            line.push_str(status.label());
            line.push(')');
        }
    }

    if visibility.show_hours {
        if let Some(duration) = format_duration(task) {
            line.push_str(" (");
            line.push_str(&duration);
            line.push(')');
        }
    }

    line
}

/// Format the effective duration as `1h 30min`, `2h` or `45min`.
///
/// A zero hours or minutes component is dropped individually; when both are
/// zero there is no duration at all and the caller omits the parenthetical.
fn format_duration(task: &Task) -> Option<String> {
    match task.effective_duration() {
        (0, 0) => None,
        (h, 0) => Some(format!("{h}h")),
        (0, m) => Some(format!("{m}min")),
        (h, m) => Some(format!("{h}h {m}min")),
    }
}
