use std::process;
use std::time::Duration;
use colored::*;

use clap::{Arg, ArgMatches, Command};

use jira_bulk::commands::{run, RunOptions};
use jira_bulk::config::{credentials_path, load_credentials};
use jira_bulk::constants::CREDENTIALS_ENV_VAR;
use jira_bulk::error::JiraResult;
use jira_bulk::filtering::IssueFilters;
use jira_bulk::formatting::print_success;
use jira_bulk::logging::{get_log_file_path, init_logging, log_error, log_info};
use jira_bulk::RunContextBuilder;

fn build_cli() -> Command {
    Command::new("jira-bulk")
        .version("1.0.0")
        .about("Filter Jira issues on a board or project and update them in bulk")
        .arg(
            Arg::new("board-name")
                .long("board-name")
                .value_name("NAME")
                .help("Jira board name (exact, case-sensitive)")
        )
        .arg(
            Arg::new("project")
                .long("project")
                .value_name("NAME")
                .help("Jira project name (ignored when --board-name is given)")
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Report what would change without modifying any issue")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("add-label")
                .long("add-label")
                .value_name("LABEL")
                .help("Label to add to issues")
        )
        .arg(
            Arg::new("move-to")
                .long("move-to")
                .value_name("STATUS")
                .help("Target status to move issues to")
        )
        .arg(
            Arg::new("status")
                .long("status")
                .value_name("STATUS")
                .help("Filter by issue status")
        )
        .arg(
            Arg::new("assignee")
                .long("assignee")
                .value_name("USER")
                .help("Filter by assignee email or name")
        )
        .arg(
            Arg::new("reporter")
                .long("reporter")
                .value_name("USER")
                .help("Filter by reporter email or name")
        )
        .arg(
            Arg::new("issue-type")
                .long("issue-type")
                .value_name("TYPE")
                .help("Filter by issue type")
        )
        .arg(
            Arg::new("priority")
                .long("priority")
                .value_name("PRIORITY")
                .help("Filter by priority")
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .value_name("LABELS")
                .help("Filter by labels (comma-separated)")
        )
        .arg(
            Arg::new("created-on")
                .long("created-on")
                .value_name("DD-MM-YYYY")
                .help("Filter by created date")
        )
        .arg(
            Arg::new("set-due-date")
                .long("set-due-date")
                .help("Set due dates from priority: critical 7d, high 15d, medium 30d, low 90d")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("credentials")
                .long("credentials")
                .value_name("PATH")
                .help(format!(
                    "Credentials file (default: ${} or ./JiraCredentials.json)",
                    CREDENTIALS_ENV_VAR
                ))
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-request timeout; requests wait indefinitely when unset")
                .value_parser(clap::value_parser!(u64))
        )
}

fn run_options(matches: &ArgMatches) -> RunOptions {
    let text = |name: &str| matches.get_one::<String>(name).cloned();

    RunOptions {
        board_name: text("board-name"),
        project_name: text("project"),
        filters: IssueFilters {
            status: text("status"),
            assignee: text("assignee"),
            reporter: text("reporter"),
            issue_type: text("issue-type"),
            priority: text("priority"),
            labels: text("labels"),
            created_on: text("created-on"),
        },
        add_label: text("add-label"),
        move_to: text("move-to"),
        set_due_date: matches.get_flag("set-due-date"),
    }
}

async fn execute(matches: &ArgMatches) -> JiraResult<()> {
    let path = credentials_path(matches.get_one::<String>("credentials").map(|s| s.as_str()));
    let mut credentials = load_credentials(&path)?;
    print_success("Credentials fetched successfully.");
    log_info(&format!("Loaded credentials from {}", path.display()));

    if let Some(secs) = matches.get_one::<u64>("timeout") {
        credentials = credentials.with_timeout(Some(Duration::from_secs(*secs)));
    }

    let context = RunContextBuilder::new()
        .with_credentials(credentials)
        .dry_run(matches.get_flag("dry-run"))
        .build()?;

    run(&context, &run_options(matches)).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    // A missing log directory should never stop a run
    let _ = init_logging();

    if let Err(e) = execute(&matches).await {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(log_file) = get_log_file_path() {
            eprintln!("Details logged to {}", log_file.display());
        }
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_flags_map_to_options() {
        let matches = build_cli().get_matches_from([
            "jira-bulk",
            "--board-name", "ABC board",
            "--status", "In Progress",
            "--labels", "ui,backend",
            "--created-on", "15-03-2024",
            "--add-label", "triaged",
            "--set-due-date",
        ]);

        let options = run_options(&matches);
        assert_eq!(options.board_name.as_deref(), Some("ABC board"));
        assert_eq!(options.project_name, None);
        assert_eq!(options.filters.status.as_deref(), Some("In Progress"));
        assert_eq!(options.filters.labels.as_deref(), Some("ui,backend"));
        assert_eq!(options.filters.created_on.as_deref(), Some("15-03-2024"));
        assert_eq!(options.add_label.as_deref(), Some("triaged"));
        assert!(options.set_due_date);
        assert!(!matches.get_flag("dry-run"));
    }

    #[test]
    fn test_timeout_must_be_numeric() {
        let result = build_cli().try_get_matches_from(["jira-bulk", "--timeout", "soon"]);
        assert!(result.is_err());
    }
}
