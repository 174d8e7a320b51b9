//! Entry point for the `wl` binary, wiring the clap commands and the MCP
//! server to a shared [`worklog_core::Journal`].

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use worklog_core::JournalBuilder;

use crate::args::{Args, Commands};
use crate::cli::Cli;
use crate::renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let journal = JournalBuilder::new()
        .with_database_path(args.database_file)
        .build()
        .await
        .context("Failed to open the worklog database")?;
    info!("Journal ready");

    if let Some(Commands::Serve) = args.command {
        return mcp::run_stdio_server(mcp::WorklogMcpServer::new(journal))
            .await
            .context("MCP server exited with an error");
    }

    let cli = Cli::new(journal, TerminalRenderer::new(!args.no_color));
    match args.command {
        Some(Commands::Report { command }) => cli.handle_report_command(command).await,
        Some(Commands::Task { command }) => cli.handle_task_command(command).await,
        Some(Commands::Range(range)) => cli.handle_range(range).await,
        Some(Commands::Export(export)) => cli.handle_export(export).await,
        Some(Commands::Prefs { command }) => cli.handle_prefs_command(command).await,
        // `serve` returned above; a bare `wl` lists the stored reports.
        Some(Commands::Serve) | None => cli.list_reports().await,
    }
}
