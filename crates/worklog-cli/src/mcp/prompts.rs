//! Prompt catalog for the MCP server.
//!
//! Prompts are static: the text, the argument declarations and the
//! placeholder substitution all live here, leaving the protocol handlers
//! to deal only with rmcp request and response shapes.

use rmcp::model::{JsonObject, Prompt, PromptArgument};

/// One declared argument of a prompt.
#[derive(Debug)]
pub struct PromptArgSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A prompt offered by the server, with `{name}` placeholders in its text.
#[derive(Debug)]
pub struct PromptSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
    pub args: &'static [PromptArgSpec],
}

impl PromptSpec {
    /// Substitute `{name}` placeholders with the supplied argument values.
    ///
    /// Required arguments must be present as strings. An omitted optional
    /// argument leaves its placeholder in the text; the template wording
    /// tells the model how to treat that.
    pub fn render(&self, args: Option<&JsonObject>) -> Result<String, String> {
        let mut text = self.text.to_string();
        for arg in self.args {
            let value = args.and_then(|map| map.get(arg.name));
            match value.and_then(|v| v.as_str()) {
                Some(given) => text = text.replace(&format!("{{{}}}", arg.name), given),
                None if value.is_some() => {
                    return Err(format!("Argument '{}' must be a string", arg.name));
                }
                None if arg.required => {
                    return Err(format!("Required argument '{}' is missing", arg.name));
                }
                None => {}
            }
        }
        Ok(text)
    }

    /// Describe this prompt for a prompts/list response.
    pub fn describe(&self) -> Prompt {
        let args = self
            .args
            .iter()
            .map(|arg| PromptArgument {
                name: arg.name.to_string(),
                title: None,
                description: Some(arg.description.to_string()),
                required: Some(arg.required),
            })
            .collect();
        Prompt::new(self.name, Some(self.description), Some(args))
    }
}

/// Look up a prompt by its advertised name.
pub fn find(name: &str) -> Option<&'static PromptSpec> {
    PROMPTS.iter().find(|spec| spec.name == name)
}

/// Every prompt the server advertises.
pub const PROMPTS: &[PromptSpec] = &[
    PromptSpec {
        name: "daily-report",
        description: "Build a complete daily work report using Worklog's MCP tools",
        text: r#"You are **Worklog Reporter**, expert at turning a day's work into a clean, shareable status update.

# Target Date
{date}

If the line above still shows a literal placeholder, no date was provided; use today's date in YYYY-MM-DD format.

# Your Task
Collect what was worked on today, record it as a structured report, and hand back the rendered preview ready to paste into chat or email.

# Step 1: Check Preferences
Call `get_preferences` first. New reports inherit the stored author name, closing line, bullet styles and spacing, so only pass overrides when the user asked for something specific.

# Step 2: Create the Report
Use `create_report` with:
- **date**: the target date (YYYY-MM-DD)
- **projects**: the project or client names this work belongs to
- **next_task**: (optional - what is planned next, shown in the footer)

If a report already exists for that date, extend it with tasks instead of recreating it. Only pass overwrite=true when the user explicitly wants the old report replaced.

# Step 3: Record the Tasks
For each distinct piece of work, call `add_task` with the report date and:
- **title**: short action-oriented description ("Fix login redirect", not "worked on auth")
- **task_id**: the tracker reference (JIRA key, issue number) when one exists
- **hours** / **minutes**: actual time spent
- **status**: 'pending', 'inprogress', 'completed' or 'onhold'

Subtasks: pass **parent** with the local id of an already-added task to nest follow-up work under it. Keep nesting shallow; two levels read best.

## Task Quality Guidelines
- One task per work item, not one task for the whole day
- Record honest durations; they are summed into the report header
- Statuses matter: recipients scan for what is done and what is blocked

# Step 4: Review the Preview
Call `show_report` with the date and present the exact text to the user. Do not reformat, rewrap or decorate it; the preview is the deliverable and its layout is controlled by the stored preferences.

If something looks wrong (misspelled title, wrong duration), fix it with `remove_task` and `add_task`, or adjust report metadata with `edit_report`, then show the preview again."#,
        args: &[PromptArgSpec {
            name: "date",
            description: "Date of the report in YYYY-MM-DD format (defaults to today when omitted)",
            required: false,
        }],
    },
    PromptSpec {
        name: "range-summary",
        description: "Summarize the reports of a date range for a standup or weekly review",
        text: r#"You are summarizing recorded work for a review period.

# Period
From {start} to {end} (both DD/MM/YYYY, inclusive).

# Your Task
Gather every report in the period and produce a concise narrative summary a manager could read in one minute.

## Step 1: Survey the Period
Call `filter_reports` with the start and end dates to see which days have reports, how many tasks each carries and the time logged per day.

## Step 2: Pull the Task Detail
Call `export_table` with the same range. The returned table lists every task with its date, tracker ID, status and duration; treat it as the source of truth for what was actually done.

## Step 3: Write the Summary
Structure the narrative as:
- **Highlights**: the 3-5 most significant completed items, with tracker IDs
- **In progress**: work started but not finished, with current status
- **Blocked / on hold**: anything stuck, so the reader can unblock it
- **Time**: total logged time across the period, noting unusually light or heavy days

Ground every claim in the exported rows. If a day in the period has no report, say so rather than guessing what happened."#,
        args: &[
            PromptArgSpec {
                name: "start",
                description: "Inclusive start of the period in DD/MM/YYYY format",
                required: true,
            },
            PromptArgSpec {
                name: "end",
                description: "Inclusive end of the period in DD/MM/YYYY format",
                required: true,
            },
        ],
    },
];
