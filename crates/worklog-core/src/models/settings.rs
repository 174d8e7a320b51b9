//! Session settings: visibility flags, gap spacing, persisted preferences.

use serde::{Deserialize, Serialize};

use super::BulletStyle;

fn default_true() -> bool {
    true
}

fn default_gap() -> u32 {
    1
}

fn default_closing() -> String {
    "Thanks & regards".to_string()
}

pub(crate) fn default_sub_icon() -> BulletStyle {
    BulletStyle::Arrow
}

/// Immutable set of flags controlling which optional fields appear in a
/// rendered line or document.
///
/// One value is loaded per session and passed explicitly into every
/// formatter call; nothing reads flags from ambient state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisibilitySettings {
    /// Show the `ID: ...` prefix when a task carries a tracker reference
    #[serde(default = "default_true")]
    pub show_id: bool,

    /// Show the status parenthetical
    #[serde(default = "default_true")]
    pub show_status: bool,

    /// Show the duration parenthetical
    #[serde(default = "default_true")]
    pub show_hours: bool,

    /// Show the `Next's Tasks` footer block
    #[serde(default = "default_true")]
    pub show_next_task: bool,
}

impl Default for VisibilitySettings {
    fn default() -> Self {
        Self {
            show_id: true,
            show_status: true,
            show_hours: true,
            show_next_task: true,
        }
    }
}

/// Newline counts separating rendered sibling blocks.
///
/// A gap of 1 puts blocks on consecutive lines; each additional unit adds
/// one blank line. Values below 1 are rejected on save.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GapSettings {
    /// Separator count between top-level task blocks
    #[serde(default = "default_gap")]
    pub task_gap: u32,

    /// Separator count between subtask blocks
    #[serde(default = "default_gap")]
    pub subtask_gap: u32,
}

impl Default for GapSettings {
    fn default() -> Self {
        Self {
            task_gap: 1,
            subtask_gap: 1,
        }
    }
}

/// The single persisted personalization record.
///
/// Stored as one serialized row and loaded once per session; new reports
/// draw their author name, styles and gaps from here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Default author name for new reports
    #[serde(default)]
    pub name: String,

    /// Closing line printed above the name
    #[serde(default = "default_closing")]
    pub closing: String,

    /// Default bullet style for top-level tasks
    #[serde(default)]
    pub bullet: BulletStyle,

    /// Default bullet style for subtask levels
    #[serde(default = "default_sub_icon")]
    pub sub_icon: BulletStyle,

    /// Default gap configuration
    #[serde(default)]
    pub gaps: GapSettings,

    /// Visibility flags applied to previews
    #[serde(default)]
    pub visibility: VisibilitySettings,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            name: String::new(),
            closing: default_closing(),
            bullet: BulletStyle::default(),
            sub_icon: default_sub_icon(),
            gaps: GapSettings::default(),
            visibility: VisibilitySettings::default(),
        }
    }
}
