//! Report operations for the Journal.

use jiff::civil::Date;
use jiff::Zoned;

use super::Journal;
use crate::{
    error::{ReportError, Result},
    models::{BulletStyle, EditReportRequest, GapSettings, ReportDocument, ReportSummary},
    params::{CreateReport, EditReport},
};

impl Journal {
    /// Creates a new report for the given date (today when omitted).
    ///
    /// Fields left unset in the parameters fall back to the stored
    /// preferences: author name, bullet styles and gap spacing. The report
    /// is validated before it is saved, so a blank author name or an empty
    /// project list is rejected here. An existing report under the same
    /// date is only replaced when `overwrite` is set.
    pub async fn create_report(&self, params: &CreateReport) -> Result<ReportDocument> {
        let date = params.validate()?;
        let params = params.clone();

        self.with_db(move |mut db| {
            let prefs = db.load_preferences()?;

            let date = date.unwrap_or_else(|| Zoned::now().date());
            let mut doc = ReportDocument::new(date, params.name.unwrap_or(prefs.name));
            doc.projects = params.projects;
            doc.next_task = params.next_task;
            doc.bullet = params
                .bullet
                .as_deref()
                .map(BulletStyle::from)
                .unwrap_or(prefs.bullet);
            doc.sub_icon = params
                .sub_icon
                .as_deref()
                .map(BulletStyle::from)
                .unwrap_or(prefs.sub_icon);
            doc.gaps = GapSettings {
                task_gap: params.task_gap.unwrap_or(prefs.gaps.task_gap),
                subtask_gap: params.subtask_gap.unwrap_or(prefs.gaps.subtask_gap),
            };
            doc.validate()?;

            db.save_report(&doc, params.overwrite)?;
            Ok(doc)
        })
        .await
    }

    /// Retrieves a report by its date key.
    pub async fn get_report(&self, date: Date) -> Result<Option<ReportDocument>> {
        self.with_db(move |db| db.get_report(date)).await
    }

    /// Applies a partial edit to the report stored under `params.date`.
    ///
    /// The stored document is loaded, mutated and written back in one
    /// blocking call. Setting `new_date` moves the report to a different
    /// date key; the store removes the old key in the same transaction.
    /// Returns the updated document together with labels for every field
    /// that actually changed.
    pub async fn edit_report(&self, params: &EditReport) -> Result<(ReportDocument, Vec<String>)> {
        let old_date = params.key()?;
        let request = EditReportRequest::try_from(params)?;

        self.with_db(move |mut db| {
            let mut doc = db
                .get_report(old_date)?
                .ok_or(ReportError::ReportNotFound { date: old_date })?;

            let changes = request.apply(&mut doc);
            doc.validate()?;
            db.update_report(old_date, &doc)?;
            Ok((doc, changes))
        })
        .await
    }

    /// Permanently deletes the report stored under the given date and
    /// returns it. This operation cannot be undone.
    pub async fn delete_report_by_date(&self, date: Date) -> Result<ReportDocument> {
        self.with_db(move |mut db| db.delete_report(date)).await
    }

    /// Lists summaries for all stored reports in insertion order.
    pub async fn list_reports(&self) -> Result<Vec<ReportSummary>> {
        self.with_db(|db| db.list_summaries()).await
    }

    /// Retrieves all reports whose dates fall within the inclusive range.
    pub async fn reports_in_range(&self, start: Date, end: Date) -> Result<Vec<ReportDocument>> {
        self.with_db(move |db| db.reports_in_range(start, end))
            .await
    }
}
