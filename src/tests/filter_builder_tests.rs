use crate::error::JiraError;
use crate::filtering::{build_jql, parse_created_on, IssueFilters};

const BASE: &str = "project = ABC ORDER BY Rank ASC";

#[test]
fn test_no_filters_returns_base_unchanged() {
    assert_eq!(build_jql(BASE, &IssueFilters::new()).unwrap(), BASE);
}

#[test]
fn test_single_status_filter() {
    let filters = IssueFilters::new().status("In Progress");
    assert_eq!(
        build_jql(BASE, &filters).unwrap(),
        "project = ABC ORDER BY Rank ASC AND status = \"In Progress\""
    );
}

#[test]
fn test_clause_order_is_fixed() {
    // Set in reverse order on purpose
    let filters = IssueFilters::new()
        .created_on("15-03-2024")
        .labels("ui, backend")
        .priority("High")
        .issue_type("Bug")
        .reporter("qa@example.com")
        .assignee("dev@example.com")
        .status("To Do");

    assert_eq!(
        build_jql("project = ABC", &filters).unwrap(),
        "project = ABC AND status = \"To Do\" AND assignee = \"dev@example.com\" \
         AND reporter = \"qa@example.com\" AND issuetype = \"Bug\" AND priority = \"High\" \
         AND labels IN (\"ui\", \"backend\") \
         AND created >= \"2024-03-15\" AND created < \"2024-03-16\""
    );
}

#[test]
fn test_labels_are_trimmed() {
    let filters = IssueFilters::new().labels("  alpha ,beta,  gamma  ");
    assert_eq!(
        build_jql("project = ABC", &filters).unwrap(),
        "project = ABC AND labels IN (\"alpha\", \"beta\", \"gamma\")"
    );
}

#[test]
fn test_created_on_is_a_half_open_day() {
    let filters = IssueFilters::new().created_on("15-03-2024");
    assert_eq!(
        build_jql("project = ABC", &filters).unwrap(),
        "project = ABC AND created >= \"2024-03-15\" AND created < \"2024-03-16\""
    );
}

#[test]
fn test_created_on_month_rollover() {
    let filters = IssueFilters::new().created_on("29-02-2024");
    assert!(build_jql("x", &filters).unwrap().ends_with("created < \"2024-03-01\""));
}

#[test]
fn test_bad_created_on_is_a_parse_error() {
    for bad in ["2024-03-15", "15/03/2024", "31-02-2024", "yesterday"] {
        let filters = IssueFilters::new().status("Done").created_on(bad);
        match build_jql(BASE, &filters) {
            Err(JiraError::ParseError(msg)) => assert!(msg.contains(bad)),
            other => panic!("Expected ParseError for {}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_parse_created_on() {
    let day = parse_created_on("01-12-2023").unwrap();
    assert_eq!(day.to_string(), "2023-12-01");
}

#[test]
fn test_values_with_quotes_are_escaped() {
    let filters = IssueFilters::new().assignee("O\"Brien");
    assert_eq!(
        build_jql("project = ABC", &filters).unwrap(),
        "project = ABC AND assignee = \"O\\\"Brien\""
    );
}
