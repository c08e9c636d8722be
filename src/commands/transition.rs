use colored::*;

use crate::cli_context::RunContext;
use crate::error::JiraResult;
use crate::formatting::{print_success, print_warning};
use crate::logging::log_info;
use crate::models::Issue;

#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    AlreadyInStatus(String),
    NoTransition(String),
    WouldMove(String),
    Moved(String),
}

/// Move each issue to `target_status` through whichever workflow transition
/// Jira currently offers with that name. Issues without one are skipped.
pub async fn move_to_status(
    ctx: &RunContext,
    issues: &[Issue],
    target_status: &str,
) -> JiraResult<Vec<TransitionOutcome>> {
    let mut outcomes = Vec::with_capacity(issues.len());

    for issue in issues {
        let key = &issue.key;
        if issue.is_in_status(target_status) {
            println!("{} already in status '{}'", key, target_status);
            outcomes.push(TransitionOutcome::AlreadyInStatus(key.clone()));
            continue;
        }

        let transitions = ctx.client().transitions(key).await?;
        let Some(matched) = transitions.iter().find(|t| t.matches(target_status)) else {
            print_warning(&format!("No valid transition found for {} → '{}'", key, target_status));
            outcomes.push(TransitionOutcome::NoTransition(key.clone()));
            continue;
        };

        if ctx.is_dry_run() {
            println!("Would move {} to '{}'", key.bright_blue(), target_status);
            outcomes.push(TransitionOutcome::WouldMove(key.clone()));
            continue;
        }

        println!("Moving {} to '{}'", key.bright_blue(), target_status);
        ctx.client().transition_issue(key, &matched.id).await?;
        log_info(&format!("Moved {} via transition {} ({})", key, matched.id, matched.name));
        print_success(&format!("Moved {} to '{}'", key, target_status));
        outcomes.push(TransitionOutcome::Moved(key.clone()));
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transition;
    use crate::tests::fake_jira::{context, sample_issue, Call, FakeJira};
    use std::sync::Arc;

    fn transition(id: &str, name: &str) -> Transition {
        Transition { id: id.to_string(), name: name.to_string(), to_status: None }
    }

    #[tokio::test]
    async fn test_skips_issue_already_in_target() {
        let fake = Arc::new(FakeJira::new());
        let ctx = context(fake.clone(), false);
        let mut issue = sample_issue("ABC-1");
        issue.status = "DONE".to_string();

        let outcomes = move_to_status(&ctx, &[issue], "Done").await.unwrap();

        assert_eq!(outcomes, vec![TransitionOutcome::AlreadyInStatus("ABC-1".to_string())]);
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_executes_matching_transition() {
        let fake = Arc::new(
            FakeJira::new().with_transitions("ABC-1", vec![transition("11", "In Progress"), transition("31", "Done")]),
        );
        let ctx = context(fake.clone(), false);

        let outcomes = move_to_status(&ctx, &[sample_issue("ABC-1")], "done").await.unwrap();

        assert_eq!(outcomes, vec![TransitionOutcome::Moved("ABC-1".to_string())]);
        assert_eq!(
            fake.calls(),
            vec![
                Call::Transitions { key: "ABC-1".to_string() },
                Call::Transition { key: "ABC-1".to_string(), transition_id: "31".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_transition_skips_and_continues() {
        let fake = Arc::new(
            FakeJira::new()
                .with_transitions("ABC-1", vec![transition("11", "In Progress")])
                .with_transitions("ABC-2", vec![transition("31", "Done")]),
        );
        let ctx = context(fake.clone(), false);
        let issues = vec![sample_issue("ABC-1"), sample_issue("ABC-2")];

        let outcomes = move_to_status(&ctx, &issues, "Done").await.unwrap();

        assert_eq!(
            outcomes,
            vec![
                TransitionOutcome::NoTransition("ABC-1".to_string()),
                TransitionOutcome::Moved("ABC-2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_dry_run_lists_but_never_transitions() {
        let fake = Arc::new(FakeJira::new().with_transitions("ABC-1", vec![transition("31", "Done")]));
        let ctx = context(fake.clone(), true);

        let outcomes = move_to_status(&ctx, &[sample_issue("ABC-1")], "Done").await.unwrap();

        assert_eq!(outcomes, vec![TransitionOutcome::WouldMove("ABC-1".to_string())]);
        assert_eq!(fake.calls(), vec![Call::Transitions { key: "ABC-1".to_string() }]);
    }
}
