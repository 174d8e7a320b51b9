use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ExportArgs, PrefsCommands, RangeArgs, ReportCommands, TaskCommands};

/// Main command-line interface for the worklog report builder
///
/// Worklog is a personal daily work-report builder. It stores one report per
/// calendar date, each holding a tree of tasks and subtasks, and renders a
/// shareable plain-text update with configurable bullet styles and spacing.
/// It provides a command-line interface for composing, previewing and
/// exporting reports with support for both local CLI operations and MCP
/// (Model Context Protocol) server mode for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "wl")]
pub struct Args {
    /// SQLite database file to use instead of
    /// $XDG_DATA_HOME/worklog/worklog.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Render plain text without terminal colors
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the worklog CLI
///
/// The CLI is organized into these command categories:
/// - `report`: Operations for managing daily reports (create, show, edit, ...)
/// - `task`: Operations for managing tasks within a report
/// - `range`: List reports within a date range
/// - `export`: Flatten a date range into a table or CSV file
/// - `prefs`: View or change the persisted preferences
/// - `serve`: Run the MCP server so AI assistants can manage reports
#[derive(Subcommand)]
pub enum Commands {
    /// Manage daily reports
    #[command(alias = "r")]
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Manage tasks within a report
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// List reports within a date range
    Range(RangeArgs),
    /// Export tasks in a date range as a table or CSV file
    #[command(alias = "x")]
    Export(ExportArgs),
    /// View or change the persisted preferences
    #[command(alias = "p")]
    Prefs {
        #[command(subcommand)]
        command: PrefsCommands,
    },
    /// Run the MCP server on stdin/stdout
    Serve,
}
