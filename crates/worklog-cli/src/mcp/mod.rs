//! MCP server implementation for Worklog
//!
//! This module implements the Model Context Protocol server for Worklog,
//! providing a standardized interface for AI models to record daily work
//! and retrieve rendered reports.

use std::sync::Arc;

use anyhow::Result;
use log::{error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};
use worklog_core::{
    params::{
        CreateReport, DateKey, DeleteReport, EditReport, RangeQuery, TaskCreate, TaskRemove,
        UpdatePreferences,
    },
    Journal,
};

pub mod handlers;
pub mod prompts;

pub use handlers::McpResult;

use handlers::McpHandlers;

/// MCP server for Worklog
#[derive(Clone)]
pub struct WorklogMcpServer {
    journal: Arc<Journal>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WorklogMcpServer {
    /// Create a new Worklog MCP server
    pub fn new(journal: Journal) -> Self {
        Self {
            journal: Arc::new(journal),
            tool_router: Self::tool_router(),
        }
    }

    /// Handlers borrow the shared journal; one is built per request.
    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.journal.clone())
    }

    #[tool(
        name = "create_report",
        description = "Create a daily work report. Provide the date (YYYY-MM-DD, defaults to today), optional project names, and optional overrides for author name, next task, bullet styles and gap spacing; unset fields inherit the stored preferences. Fails if a report already exists for the date unless overwrite=true."
    )]
    async fn create_report(&self, params: Parameters<CreateReport>) -> McpResult {
        self.handlers().create_report(params).await
    }

    #[tool(
        name = "edit_report",
        description = "Modify a stored report's metadata. Use the date (YYYY-MM-DD) to identify it. Can update: author name, project list, next task (or clear it with clear_next_task=true), bullet styles, gap spacing, and the date itself via new_date. Task content is managed with add_task and remove_task instead."
    )]
    async fn edit_report(&self, params: Parameters<EditReport>) -> McpResult {
        self.handlers().edit_report(params).await
    }

    #[tool(
        name = "delete_report",
        description = "Permanently delete a report and all its tasks from the database. This operation cannot be undone, so it requires confirmed=true; calls without confirmation are rejected. Use the date (YYYY-MM-DD) to identify the report."
    )]
    async fn delete_report(&self, params: Parameters<DeleteReport>) -> McpResult {
        self.handlers().delete_report(params).await
    }

    #[tool(
        name = "show_report",
        description = "Render a stored report exactly as it should be pasted into chat or email, honoring the stored visibility preferences. Use the date (YYYY-MM-DD) to identify it. The returned text is the final artifact; present it verbatim rather than reformatting it."
    )]
    async fn show_report(&self, params: Parameters<DateKey>) -> McpResult {
        self.handlers().show_report(params).await
    }

    #[tool(
        name = "list_reports",
        description = "List summaries of all stored reports, in the order they were saved. Each summary shows the date, task count, total logged time, projects and author. Use show_report with a date to see a report's full text."
    )]
    async fn list_reports(&self) -> McpResult {
        self.handlers().list_reports().await
    }

    #[tool(
        name = "filter_reports",
        description = "List summaries of reports whose dates fall within an inclusive range. Both bounds use DD/MM/YYYY format; bounds that do not parse select nothing rather than failing. Useful for reviewing a week or a sprint."
    )]
    async fn filter_reports(&self, params: Parameters<RangeQuery>) -> McpResult {
        self.handlers().filter_reports(params).await
    }

    #[tool(
        name = "export_table",
        description = "Flatten every task in a date range into a markdown table with Date, ID, Task, Status and Time columns, sorted chronologically. Both bounds use DD/MM/YYYY format. Subtasks appear as rows of their own."
    )]
    async fn export_table(&self, params: Parameters<RangeQuery>) -> McpResult {
        self.handlers().export_table(params).await
    }

    #[tool(
        name = "add_task",
        description = "Add a task to the report for a date (YYYY-MM-DD). Requires a title. Optionally include: task_id (tracker reference shown as the ID: prefix), hours and minutes spent, status ('pending', 'inprogress', 'completed' or 'onhold'), and parent (local id of an existing task to nest under). Returns the new task's local id."
    )]
    async fn add_task(&self, params: Parameters<TaskCreate>) -> McpResult {
        self.handlers().add_task(params).await
    }

    #[tool(
        name = "remove_task",
        description = "Remove a task from the report for a date (YYYY-MM-DD) by its local id, along with any subtasks nested under it. Pass parent when removing a nested subtask. Local ids are returned by add_task when the task is created."
    )]
    async fn remove_task(&self, params: Parameters<TaskRemove>) -> McpResult {
        self.handlers().remove_task(params).await
    }

    #[tool(
        name = "get_preferences",
        description = "Show the stored personalization settings: author name, closing line, default bullet styles, gap spacing, and which optional fields (id, status, hours, next task) appear in rendered reports. New reports inherit these at creation time."
    )]
    async fn get_preferences(&self) -> McpResult {
        self.handlers().get_preferences().await
    }

    #[tool(
        name = "set_preferences",
        description = "Update personalization settings. All fields are optional; unset fields keep their stored value. Visibility flags apply to every report rendered afterwards, while defaults like bullet styles are copied into reports at creation time. Gap values must be at least 1."
    )]
    async fn set_preferences(&self, params: Parameters<UpdatePreferences>) -> McpResult {
        self.handlers().set_preferences(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WorklogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "worklog".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Worklog is a daily work report builder that records what you worked on and renders it as clean, shareable text.

## Core Concepts
- **Reports**: One per calendar day (YYYY-MM-DD), carrying projects, author, an optional next task, and formatting choices
- **Tasks**: The work items of a report, each with a title, optional tracker ID, time spent and status (pending/inprogress/completed/onhold); tasks can nest under a parent task
- **Preferences**: Stored personalization (author name, closing line, bullet styles, spacing, visibility flags) inherited by new reports

## Typical Flows

### Recording a Day
1. Create the day's report with `create_report` - the date defaults to today
2. Add each piece of work with `add_task` - include tracker IDs and honest durations
3. Render the final text with `show_report` and paste it wherever it needs to go

### Reviewing a Period
1. Use `filter_reports` with DD/MM/YYYY bounds to see which days have reports
2. Use `export_table` for a flat task table suitable for timesheets or summaries

### Fixing Mistakes
- `edit_report` changes report metadata, including moving a report to another date with new_date
- `remove_task` plus `add_task` replaces a wrong task entry
- `delete_report` permanently drops a day (requires confirmed=true)

## Best Practices
- One task per work item, with an action-oriented title
- Set statuses; recipients scan for what is done and what is blocked
- Check `get_preferences` before overriding formatting in create_report

## Tool Categories
- **Report Management**: create_report, list_reports, show_report, edit_report, delete_report
- **Task Management**: add_task, remove_task
- **Queries & Export**: filter_reports, export_table
- **Personalization**: get_preferences, set_preferences

## Output Contract
`show_report` returns the exact text of the report. Its layout is controlled by the stored preferences, so present it verbatim rather than reformatting it."#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.handlers().list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.handlers().get_prompt(request, context).await
    }
}

/// Serve MCP over stdin and stdout until the peer disconnects or a
/// termination signal arrives.
pub async fn run_stdio_server(server: WorklogMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!(
        "Worklog MCP server starting on stdio with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("failed to start MCP transport: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => match result {
            Ok(_) => info!("client disconnected"),
            Err(e) => error!("transport error: {e:?}"),
        },
        _ = sigint.recv() => info!("SIGINT received, shutting down"),
        _ = sigterm.recv() => info!("SIGTERM received, shutting down"),
    }

    Ok(())
}
