//! Report handler operations that return formatted wrapper types for the
//! Journal.

use super::Journal;
use crate::{
    display::{ReportPreview, ReportSummaries},
    error::Result,
    export::{rows_from_reports, ExportRow},
    models::ReportDocument,
    params::{DateKey, DeleteReport, RangeQuery},
    ReportError,
};

impl Journal {
    /// Handle listing all stored reports.
    ///
    /// Converts reports to summaries with task count and total duration
    /// information for consistent list display across interfaces. Reports
    /// appear in insertion order, not date order.
    ///
    /// # Returns
    ///
    /// A ReportSummaries wrapper containing report summary objects
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::JournalBuilder;
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let summaries = journal.list_reports_summary().await?;
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn list_reports_summary(&self) -> Result<ReportSummaries> {
        let summaries = self.list_reports().await?;
        Ok(ReportSummaries(summaries))
    }

    /// Handle rendering the shareable preview for a stored report.
    ///
    /// Loads the report together with the persisted preferences and renders
    /// the full document: header line, project line, task tree, next-task
    /// block and closing. Visibility flags and the closing line come from
    /// the preferences.
    ///
    /// # Arguments
    ///
    /// * `params` - Date key specifying which report to render
    ///
    /// # Returns
    ///
    /// The rendered preview text, or None if no report is stored under the
    /// given date
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{params::DateKey, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = DateKey { date: "2024-03-01".to_string() };
    /// if let Some(preview) = journal.show_report_preview(&params).await? {
    ///     println!("{preview}");
    /// }
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn show_report_preview(&self, params: &DateKey) -> Result<Option<String>> {
        let date = params.parse()?;
        let Some(doc) = self.get_report(date).await? else {
            return Ok(None);
        };

        let prefs = self.preferences().await?;
        let preview = ReportPreview::new(&doc, &prefs.visibility)
            .with_closing(&prefs.closing)
            .to_string();
        Ok(Some(preview))
    }

    /// Handle permanently deleting a report with confirmation.
    ///
    /// Permanently removes a report and all its tasks from the database.
    /// This operation cannot be undone. Returns the deleted document for
    /// confirmation output.
    ///
    /// Requires explicit confirmation via the `confirmed` field to prevent
    /// accidental deletion. Returns an error if confirmation is not
    /// provided.
    ///
    /// # Arguments
    ///
    /// * `params` - DeleteReport parameters containing the date key and
    ///   confirmation flag
    ///
    /// # Returns
    ///
    /// The report that was deleted, or None if no report is stored under
    /// the given date
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidInput` if `confirmed` field is false
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{params::DeleteReport, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = DeleteReport {
    ///     date: "2024-03-01".to_string(),
    ///     confirmed: true,
    /// };
    /// let deleted = journal.delete_report(&params).await?;
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn delete_report(&self, params: &DeleteReport) -> Result<Option<ReportDocument>> {
        // Check confirmation flag first
        if !params.confirmed {
            return Err(ReportError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Report deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion.".to_string(),
            });
        }

        let date = crate::params::parse_date_field("date", &params.date)?;
        match self.delete_report_by_date(date).await {
            Ok(doc) => Ok(Some(doc)),
            Err(ReportError::ReportNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Handle filtering stored reports by an inclusive date range.
    ///
    /// Range bounds use the DD/MM/YYYY entry format. Bounds that do not
    /// parse select nothing, so the result is empty rather than an error.
    /// Matching reports keep their insertion order.
    ///
    /// # Arguments
    ///
    /// * `params` - Range parameters containing the start and end bounds
    ///
    /// # Returns
    ///
    /// A ReportSummaries wrapper containing summaries of reports whose
    /// dates fall within the range
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{params::RangeQuery, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = RangeQuery {
    ///     start: "01/01/2024".to_string(),
    ///     end: "31/01/2024".to_string(),
    /// };
    /// let summaries = journal.filter_reports_summary(&params).await?;
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn filter_reports_summary(&self, params: &RangeQuery) -> Result<ReportSummaries> {
        let Some((start, end)) = params.bounds() else {
            return Ok(ReportSummaries(Vec::new()));
        };

        let summaries = self
            .list_reports()
            .await?
            .into_iter()
            .filter(|s| s.date >= start && s.date <= end)
            .collect();
        Ok(ReportSummaries(summaries))
    }

    /// Handle flattening reports in a date range into export rows.
    ///
    /// Rows are ordered chronologically by date, one row per task and one
    /// per subtask, with blank date and id cells for grouping. Invalid
    /// range bounds select nothing, matching the range filter.
    ///
    /// # Arguments
    ///
    /// * `params` - Range parameters containing the start and end bounds
    ///
    /// # Returns
    ///
    /// Export rows ready for the terminal table or a CSV sink
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use worklog_core::{display::ExportTable, params::RangeQuery, JournalBuilder};
    /// # async {
    /// let journal = JournalBuilder::new().build().await?;
    /// let params = RangeQuery {
    ///     start: "01/01/2024".to_string(),
    ///     end: "31/01/2024".to_string(),
    /// };
    /// let rows = journal.export_rows(&params).await?;
    /// println!("{}", ExportTable::new(&rows));
    /// # Result::<(), worklog_core::ReportError>::Ok(())
    /// # };
    /// ```
    pub async fn export_rows(&self, params: &RangeQuery) -> Result<Vec<ExportRow>> {
        let Some((start, end)) = params.bounds() else {
            return Ok(Vec::new());
        };

        let reports = self.reports_in_range(start, end).await?;
        Ok(rows_from_reports(&reports, true))
    }
}
