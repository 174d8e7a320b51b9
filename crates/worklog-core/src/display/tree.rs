//! Recursive task-tree rendering.

use super::line::format_task_line;
use crate::models::{BulletStyle, GapSettings, ReportDocument, Task, VisibilitySettings};

/// Bullet styles and gap configuration driving one tree render.
#[derive(Debug, Clone, Copy)]
pub struct TreeLayout {
    /// Style for top-level task lines
    pub bullet: BulletStyle,
    /// Style for every subtask level
    pub sub_icon: BulletStyle,
    /// Separator configuration between sibling blocks
    pub gaps: GapSettings,
}

impl From<&ReportDocument> for TreeLayout {
    fn from(doc: &ReportDocument) -> Self {
        Self {
            bullet: doc.bullet,
            sub_icon: doc.sub_icon,
            gaps: doc.gaps,
        }
    }
}

/// Render a task list with its subtasks into indented, bulleted lines.
///
/// Each task renders as `indent + glyph + line` where the indent is four
/// spaces per depth level and the glyph comes from the top-level style at
/// depth 0 and the subtask style below. Ordinals are 0-based positions
/// within one sibling list and reset per list, so numbered lists restart
/// at `1.` for every set of subtasks.
///
/// A subtree sits directly below its parent line (single newline). The
/// separator between consecutive sibling *blocks* (a line plus its whole
/// subtree) is `"\n"` repeated `task_gap` times at the top level and
/// `subtask_gap` times below, so a gap of 1 means consecutive lines and
/// each extra unit adds one blank line. An empty list renders as an empty
/// string.
pub fn format_task_tree(
    tasks: &[Task],
    layout: &TreeLayout,
    visibility: &VisibilitySettings,
) -> String {
    format_level(tasks, 0, layout, visibility)
}

fn format_level(
    tasks: &[Task],
    depth: usize,
    layout: &TreeLayout,
    visibility: &VisibilitySettings,
) -> String {
    let gap = if depth == 0 {
        layout.gaps.task_gap
    } else {
        layout.gaps.subtask_gap
    };
    let separator = "\n".repeat(gap as usize);

    tasks
        .iter()
        .enumerate()
        .map(|(ordinal, task)| format_block(task, depth, ordinal, layout, visibility))
        .collect::<Vec<_>>()
        .join(&separator)
}

fn format_block(
    task: &Task,
    depth: usize,
    ordinal: usize,
    layout: &TreeLayout,
    visibility: &VisibilitySettings,
) -> String {
    let style = if depth == 0 {
        layout.bullet
    } else {
        layout.sub_icon
    };

    let mut block = format!(
        "{}{}{}",
        "    ".repeat(depth),
        style.glyph(ordinal),
        format_task_line(task, visibility)
    );

    if !task.subtasks.is_empty() {
        block.push('\n');
        block.push_str(&format_level(&task.subtasks, depth + 1, layout, visibility));
    }

    block
}
