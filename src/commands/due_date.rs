use chrono::{Days, NaiveDate};
use colored::*;

use crate::cli_context::RunContext;
use crate::constants::DISPLAY_DATE_FORMAT;
use crate::error::JiraResult;
use crate::jira_error;
use crate::formatting::print_success;
use crate::logging::log_info;
use crate::models::{Issue, IssueUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum DueDateOutcome {
    Skipped(String),
    WouldSet(String, NaiveDate),
    Set(String, NaiveDate),
}

/// Days allowed to resolve an issue of the given priority.
/// Priorities outside the table get no due date.
pub fn severity_offset_days(priority: Option<&str>) -> Option<u64> {
    match priority?.to_lowercase().as_str() {
        "critical" => Some(7),
        "high" => Some(15),
        "medium" => Some(30),
        "low" => Some(90),
        _ => None,
    }
}

/// Due date from the creation day plus the priority offset, if any.
pub fn due_date_for(issue: &Issue) -> JiraResult<Option<NaiveDate>> {
    let Some(days) = severity_offset_days(issue.priority.as_deref()) else {
        return Ok(None);
    };

    let created = issue.created_day()?;
    created
        .checked_add_days(Days::new(days))
        .map(Some)
        .ok_or_else(|| jira_error!(ParseError, "Due date for {} is out of range", issue.key))
}

pub async fn set_due_dates(ctx: &RunContext, issues: &[Issue]) -> JiraResult<Vec<DueDateOutcome>> {
    let mut outcomes = Vec::with_capacity(issues.len());

    for issue in issues {
        let key = &issue.key;
        let Some(due) = due_date_for(issue)? else {
            outcomes.push(DueDateOutcome::Skipped(key.clone()));
            continue;
        };
        let shown = due.format(DISPLAY_DATE_FORMAT).to_string();

        if ctx.is_dry_run() {
            println!("Would set due date for {} to {}", key.bright_blue(), shown);
            outcomes.push(DueDateOutcome::WouldSet(key.clone(), due));
            continue;
        }

        println!("Setting due date for {} to {}", key.bright_blue(), shown);
        ctx.client().update_issue(key, &IssueUpdate::DueDate(due)).await?;
        log_info(&format!("Set due date of {} to {}", key, due));
        print_success(&format!("Due date set for {}", key));
        outcomes.push(DueDateOutcome::Set(key.clone(), due));
    }

    Ok(outcomes)
}
