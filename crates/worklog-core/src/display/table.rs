//! Markdown table rendering for export rows.

use std::fmt;

use crate::export::ExportRow;

/// Display wrapper rendering export rows as a markdown table.
///
/// Columns mirror the export tuple: Date, ID, Task, Status, Time. Blank
/// grouping cells stay blank so consecutive rows of one report read as a
/// visual block, same as the CSV sink.
pub struct ExportTable<'a> {
    rows: &'a [ExportRow],
}

impl<'a> ExportTable<'a> {
    /// Wrap a row set for table rendering.
    pub fn new(rows: &'a [ExportRow]) -> Self {
        Self { rows }
    }
}

impl fmt::Display for ExportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No tasks in range.");
        }

        writeln!(f, "| Date | ID | Task | Status | Time |")?;
        writeln!(f, "|------|----|------|--------|------|")?;
        for row in self.rows {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                row.date, row.id, row.title, row.status, row.duration
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_render_placeholder() {
        let table = ExportTable::new(&[]);
        assert_eq!(table.to_string(), "No tasks in range.\n");
    }

    #[test]
    fn rows_render_one_table_line_each() {
        let rows = vec![
            ExportRow {
                date: "2024-01-05".to_string(),
                id: "T1".to_string(),
                title: "Fix bug".to_string(),
                status: "Completed".to_string(),
                duration: "1h 30m".to_string(),
            },
            ExportRow {
                date: String::new(),
                id: String::new(),
                title: "Retest".to_string(),
                status: String::new(),
                duration: "0h 20m".to_string(),
            },
        ];

        let rendered = ExportTable::new(&rows).to_string();
        assert!(rendered.starts_with("| Date | ID | Task | Status | Time |\n"));
        assert!(rendered.contains("| 2024-01-05 | T1 | Fix bug | Completed | 1h 30m |\n"));
        assert!(rendered.contains("|  |  | Retest |  | 0h 20m |\n"));
    }
}
