//! MCP tool handlers implementation
//!
//! The handler methods here hold the actual tool logic; the router in the
//! parent module wires them to tool names and descriptions. Parameter types
//! come straight from `worklog_core::params`, which derive `JsonSchema`
//! behind the core crate's `schema` feature, so no wrapper structs are
//! needed at this layer.

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, PromptMessage, PromptMessageContent, PromptMessageRole,
    },
    service::RequestContext,
    ErrorData, RoleServer,
};
use worklog_core::{
    display::{CreateResult, DeleteResult, ExportTable, OperationStatus, UpdateResult},
    params::{
        CreateReport, DateKey, DeleteReport, EditReport, RangeQuery, TaskCreate, TaskRemove,
        UpdatePreferences,
    },
    Journal, ReportError,
};

use super::prompts;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Wrap a journal failure for the wire, keeping the operation context.
fn journal_error(message: &str, error: &ReportError) -> ErrorData {
    ErrorData::internal_error(format!("{message}: {error}"), None)
}

/// Tool and prompt logic behind the MCP router.
///
/// The journal handle is shared without a lock; every operation opens its
/// own database connection, so concurrent tool calls cannot interleave
/// within one connection.
pub struct McpHandlers {
    journal: Arc<Journal>,
}

impl McpHandlers {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self { journal }
    }

    /// Create a new report, inheriting unset fields from preferences.
    pub async fn create_report(&self, Parameters(params): Parameters<CreateReport>) -> McpResult {
        debug!("create_report: {:?}", params);

        let report = self
            .journal
            .create_report(&params)
            .await
            .map_err(|e| journal_error("Failed to create report", &e))?;

        let result = CreateResult::new(report);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Update report metadata, including moving it to a new date key.
    pub async fn edit_report(&self, Parameters(params): Parameters<EditReport>) -> McpResult {
        debug!("edit_report: {:?}", params);

        let (report, changes) = self
            .journal
            .edit_report(&params)
            .await
            .map_err(|e| journal_error("Failed to edit report", &e))?;

        let result = UpdateResult::new(report, changes);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Permanently delete a report; requires the confirmed flag.
    pub async fn delete_report(&self, Parameters(params): Parameters<DeleteReport>) -> McpResult {
        debug!("delete_report: {:?}", params);

        let report = self
            .journal
            .delete_report(&params)
            .await
            .map_err(|e| journal_error("Failed to delete report", &e))?
            .ok_or_else(|| {
                ErrorData::internal_error(format!("No report found for {}", params.date), None)
            })?;

        let result = DeleteResult::new(report);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Render a stored report exactly as it would be pasted.
    pub async fn show_report(&self, Parameters(params): Parameters<DateKey>) -> McpResult {
        debug!("show_report: {:?}", params);

        let preview = self
            .journal
            .show_report_preview(&params)
            .await
            .map_err(|e| journal_error("Failed to show report", &e))?
            .ok_or_else(|| {
                ErrorData::internal_error(format!("No report found for {}", params.date), None)
            })?;

        Ok(CallToolResult::success(vec![Content::text(preview)]))
    }

    /// List summaries of every stored report, in insertion order.
    pub async fn list_reports(&self) -> McpResult {
        debug!("list_reports");

        let summaries = self
            .journal
            .list_reports_summary()
            .await
            .map_err(|e| journal_error("Failed to list reports", &e))?;

        let result = format!("# Reports\n\n{}", summaries);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// List summaries of reports within an inclusive date range.
    pub async fn filter_reports(&self, Parameters(params): Parameters<RangeQuery>) -> McpResult {
        debug!("filter_reports: {:?}", params);

        let summaries = self
            .journal
            .filter_reports_summary(&params)
            .await
            .map_err(|e| journal_error("Failed to filter reports", &e))?;

        let result = format!(
            "# Reports from {} to {}\n\n{}",
            params.start, params.end, summaries
        );
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// Flatten the tasks of a date range into a markdown table.
    pub async fn export_table(&self, Parameters(params): Parameters<RangeQuery>) -> McpResult {
        debug!("export_table: {:?}", params);

        let rows = self
            .journal
            .export_rows(&params)
            .await
            .map_err(|e| journal_error("Failed to export reports", &e))?;

        let result = ExportTable::new(&rows);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Add a task or subtask to a stored report.
    pub async fn add_task(&self, Parameters(params): Parameters<TaskCreate>) -> McpResult {
        debug!("add_task: {:?}", params);

        let (id, report) = self
            .journal
            .add_task_to_report(&params)
            .await
            .map_err(|e| journal_error("Failed to add task", &e))?;

        let result = OperationStatus::success(format!(
            "Added task {id} to the report for {}",
            report.date
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Remove a task, and any subtasks it carries, from a stored report.
    pub async fn remove_task(&self, Parameters(params): Parameters<TaskRemove>) -> McpResult {
        debug!("remove_task: {:?}", params);

        let (removed, report) = self
            .journal
            .remove_task_from_report(&params)
            .await
            .map_err(|e| journal_error("Failed to remove task", &e))?;

        let result = OperationStatus::success(format!(
            "Removed task {} '{}' from the report for {}",
            removed.id, removed.title, report.date
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// Show the stored personalization settings.
    pub async fn get_preferences(&self) -> McpResult {
        debug!("get_preferences");

        let prefs = self
            .journal
            .preferences()
            .await
            .map_err(|e| journal_error("Failed to load preferences", &e))?;

        let result = format!("# Preferences\n\n{}", prefs);
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// Update personalization settings; unset fields keep their value.
    pub async fn set_preferences(
        &self,
        Parameters(params): Parameters<UpdatePreferences>,
    ) -> McpResult {
        debug!("set_preferences: {:?}", params);

        let (prefs, changes) = self
            .journal
            .update_preferences(&params)
            .await
            .map_err(|e| journal_error("Failed to update preferences", &e))?;

        let result = if changes.is_empty() {
            OperationStatus::success("No preference changes provided").to_string()
        } else {
            let status = OperationStatus::success(format!("Updated {}", changes.join(", ")));
            format!("{status}\n# Preferences\n\n{prefs}")
        };

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    /// List the prompt catalog.
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        debug!("list_prompts");

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts: prompts::PROMPTS.iter().map(|spec| spec.describe()).collect(),
        })
    }

    /// Render a prompt by name, substituting the supplied arguments.
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        debug!("get_prompt: {}", request.name);

        let spec = prompts::find(&request.name)
            .ok_or_else(|| ErrorData::invalid_params("Prompt not found", None))?;
        let text = spec
            .render(request.arguments.as_ref())
            .map_err(|reason| ErrorData::invalid_params(reason, None))?;

        Ok(GetPromptResult {
            description: Some(spec.description.to_string()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(text),
            }],
        })
    }
}
