//! Full report preview assembly.

use std::fmt;

use super::tree::{format_task_tree, TreeLayout};
use crate::models::{ReportDocument, VisibilitySettings};

/// Closing line used when preferences carry none.
pub const DEFAULT_CLOSING: &str = "Thanks & regards";

const HEADER_RULE: &str = "----------------------------------------";
const NEXT_RULE: &str = "---------------------";

/// Display wrapper assembling the final shareable preview text.
///
/// The output is the plain-text artifact users copy into mail or chat, so
/// it is rendered verbatim (no markdown post-processing). Layout:
///
/// ```text
/// Today's work update - 2024-03-01
///
/// Project: Rukkor & Internal
/// ----------------------------------------
/// ● ID: T1 - Fix bug (Completed) (1h 30min)
///
/// Next's Tasks
/// ---------------------
/// => Deploy release
///
/// Thanks & regards
/// Sam
/// ```
///
/// The project line disappears entirely when no project is selected, the
/// task section when the tree renders empty, and the `Next's Tasks` block
/// unless it is both visible and non-blank. Free text is trimmed at render
/// time; stored documents keep whatever the user typed.
pub struct ReportPreview<'a> {
    document: &'a ReportDocument,
    visibility: &'a VisibilitySettings,
    closing: &'a str,
}

impl<'a> ReportPreview<'a> {
    /// Wrap a document for rendering with the default closing line.
    pub fn new(document: &'a ReportDocument, visibility: &'a VisibilitySettings) -> Self {
        Self {
            document,
            visibility,
            closing: DEFAULT_CLOSING,
        }
    }

    /// Use the closing line from preferences instead of the default.
    pub fn with_closing(mut self, closing: &'a str) -> Self {
        self.closing = closing;
        self
    }
}

impl fmt::Display for ReportPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.document;

        writeln!(f, "Today's work update - {}", doc.date)?;
        writeln!(f)?;

        let projects: Vec<&str> = doc
            .projects
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect();
        if !projects.is_empty() {
            writeln!(f, "Project: {}", projects.join(" & "))?;
        }
        writeln!(f, "{HEADER_RULE}")?;

        let tree = format_task_tree(&doc.tasks, &TreeLayout::from(doc), self.visibility);
        if !tree.is_empty() {
            writeln!(f, "{tree}")?;
        }

        if self.visibility.show_next_task {
            if let Some(next) = doc.next_task.as_deref() {
                let next = next.trim();
                if !next.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Next's Tasks")?;
                    writeln!(f, "{NEXT_RULE}")?;
                    writeln!(f, "=> {next}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", self.closing)?;
        writeln!(f, "{}", doc.name.trim())
    }
}
