use jira_bulk::commands::{due_date_for, select_target, severity_offset_days, Target};
use jira_bulk::filtering::{build_jql, IssueFilters};
use jira_bulk::models::Issue;

#[test]
fn test_board_filter_with_status() {
    let filters = IssueFilters::new().status("In Progress");
    let jql = build_jql("project = ABC ORDER BY Rank ASC", &filters).unwrap();
    assert_eq!(jql, "project = ABC ORDER BY Rank ASC AND status = \"In Progress\"");
}

#[test]
fn test_every_filter_in_order() {
    let filters = IssueFilters {
        status: Some("Open".to_string()),
        assignee: Some("a@example.com".to_string()),
        reporter: Some("r@example.com".to_string()),
        issue_type: Some("Task".to_string()),
        priority: Some("Low".to_string()),
        labels: Some("one".to_string()),
        created_on: Some("01-01-2024".to_string()),
    };

    let jql = build_jql("project = ABC", &filters).unwrap();
    let positions: Vec<usize> = ["status", "assignee", "reporter", "issuetype", "priority", "labels", "created >="]
        .iter()
        .map(|field| jql.find(field).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
    assert!(jql.starts_with("project = ABC AND status = \"Open\""));
}

#[test]
fn test_target_selection() {
    assert_eq!(select_target(None, None), None);
    assert_eq!(
        select_target(Some("Board"), Some("Project")),
        Some(Target::Board("Board".to_string()))
    );
}

#[test]
fn test_due_date_example() {
    let issue = Issue {
        key: "ABC-9".to_string(),
        status: "Open".to_string(),
        labels: Vec::new(),
        priority: Some("critical".to_string()),
        assignee: None,
        reporter: None,
        issue_type: None,
        created: "2024-01-01T00:00:00.000+0000".to_string(),
    };

    let due = due_date_for(&issue).unwrap().unwrap();
    assert_eq!(due.format("%d-%m-%Y").to_string(), "08-01-2024");
    assert_eq!(severity_offset_days(Some("informational")), None);
}
