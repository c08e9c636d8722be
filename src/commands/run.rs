use crate::cli_context::RunContext;
use crate::error::{JiraError, JiraResult};
use crate::filtering::{build_jql, IssueFilters};
use crate::formatting::{print_success, print_warning, show_dots};
use crate::logging::log_info;

use super::{add_label, fetch_all_issues, move_to_status, resolve_base_jql, select_target, set_due_dates, Target};

/// One invocation's worth of command-line choices.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub board_name: Option<String>,
    pub project_name: Option<String>,
    pub filters: IssueFilters,
    pub add_label: Option<String>,
    pub move_to: Option<String>,
    pub set_due_date: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Dry run without a board or project: nothing was resolved.
    NothingToCheck,
    NoIssues { jql: String },
    Completed { jql: String, issues: usize },
}

pub async fn run(ctx: &RunContext, options: &RunOptions) -> JiraResult<RunOutcome> {
    // Reject a malformed --created-on before talking to Jira.
    options.filters.clauses()?;

    let account = ctx.authenticate().await?;
    log_info(&format!("Authenticated as {}", account));
    print_success("Jira authentication successful.");

    if ctx.is_dry_run() {
        print_warning("Dry run: no issue will be modified.");
    }

    let Some(target) = select_target(options.board_name.as_deref(), options.project_name.as_deref()) else {
        if ctx.is_dry_run() {
            println!("No board or project given; nothing to check.");
            return Ok(RunOutcome::NothingToCheck);
        }
        return Err(JiraError::InvalidInput(
            "Either --board-name or --project must be provided.".to_string(),
        ));
    };

    let looking_for = match &target {
        Target::Board(name) => format!("Looking for board: {}", name),
        Target::Project(name) => format!("Looking for project: {}", name),
    };
    show_dots(&looking_for, ctx.animate()).await;

    let base_jql = resolve_base_jql(ctx.client(), &target).await?;
    if ctx.is_dry_run() {
        print_success(&format!("{} exists.", target.describe()));
    }

    let jql = build_jql(&base_jql, &options.filters)?;
    println!("JQL: {}", jql);
    log_info(&format!("Searching with JQL: {}", jql));

    let issues = fetch_all_issues(ctx.client(), &jql).await?;
    println!("Total issues matching filters: {}", issues.len());
    if issues.is_empty() {
        print_success("No issues found matching the filters.");
        return Ok(RunOutcome::NoIssues { jql });
    }

    if let Some(label) = options.add_label.as_deref().filter(|l| !l.is_empty()) {
        show_dots(&format!("Adding label '{}'", label), ctx.animate()).await;
        add_label(ctx, &issues, label).await?;
    }

    if let Some(status) = options.move_to.as_deref().filter(|s| !s.is_empty()) {
        println!("Moving issues to status '{}'", status);
        move_to_status(ctx, &issues, status).await?;
    }

    if options.set_due_date {
        println!("Setting due dates based on severity...");
        set_due_dates(ctx, &issues).await?;
    }

    print_success("Completed.");
    Ok(RunOutcome::Completed { jql, issues: issues.len() })
}
