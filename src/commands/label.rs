use colored::*;

use crate::cli_context::RunContext;
use crate::error::JiraResult;
use crate::formatting::print_success;
use crate::logging::log_info;
use crate::models::{Issue, IssueUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum LabelOutcome {
    AlreadyLabelled(String),
    WouldUpdate(String),
    Updated(String),
}

/// Make sure every issue carries `label`.
///
/// The update sends the issue's full label set with `label` appended, so a
/// label someone else adds between the fetch and the update is overwritten.
pub async fn add_label(ctx: &RunContext, issues: &[Issue], label: &str) -> JiraResult<Vec<LabelOutcome>> {
    let mut outcomes = Vec::with_capacity(issues.len());

    for issue in issues {
        let key = &issue.key;
        if issue.has_label(label) {
            println!("{} already has label '{}'", key, label);
            outcomes.push(LabelOutcome::AlreadyLabelled(key.clone()));
            continue;
        }

        if ctx.is_dry_run() {
            println!("Would update {} with label '{}'", key.bright_blue(), label);
            outcomes.push(LabelOutcome::WouldUpdate(key.clone()));
            continue;
        }

        println!("Updating {} with label '{}'", key.bright_blue(), label);
        let mut labels = issue.labels.clone();
        labels.push(label.to_string());
        ctx.client().update_issue(key, &IssueUpdate::Labels(labels)).await?;
        log_info(&format!("Added label '{}' to {}", label, key));
        print_success(&format!("Updated {} with label '{}'", key, label));
        outcomes.push(LabelOutcome::Updated(key.clone()));
    }

    Ok(outcomes)
}
