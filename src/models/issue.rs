use chrono::NaiveDate;
use serde::Serialize;

use crate::constants::JIRA_DATE_FORMAT;
use crate::error::{JiraError, JiraResult};
use crate::jira_error;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub status: String,
    pub labels: Vec<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub issue_type: Option<String>,
    /// Raw creation timestamp as returned by Jira, e.g. `2024-01-01T09:30:00.000+0000`.
    pub created: String,
}

impl Issue {
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn is_in_status(&self, status: &str) -> bool {
        self.status.to_lowercase() == status.to_lowercase()
    }

    /// The calendar day the issue was created on; time of day is dropped.
    pub fn created_day(&self) -> JiraResult<NaiveDate> {
        let day = self.created.get(..10).ok_or_else(|| {
            jira_error!(ParseError, "Invalid created timestamp '{}' on {}", self.created, self.key)
        })?;
        NaiveDate::parse_from_str(day, JIRA_DATE_FORMAT).map_err(|e| {
            JiraError::ParseError(format!(
                "Invalid created timestamp '{}' on {}: {}",
                self.created, self.key, e
            ))
        })
    }
}

/// A single field update pushed with `PUT /issue/{key}`.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueUpdate {
    /// Replaces the whole label set.
    Labels(Vec<String>),
    DueDate(NaiveDate),
}

impl IssueUpdate {
    pub fn to_fields(&self) -> serde_json::Value {
        match self {
            Self::Labels(labels) => serde_json::json!({ "labels": labels }),
            Self::DueDate(date) => {
                serde_json::json!({ "duedate": date.format(JIRA_DATE_FORMAT).to_string() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(created: &str) -> Issue {
        Issue {
            key: "ABC-1".to_string(),
            status: "In Progress".to_string(),
            labels: vec!["backend".to_string()],
            priority: Some("High".to_string()),
            assignee: None,
            reporter: None,
            issue_type: Some("Bug".to_string()),
            created: created.to_string(),
        }
    }

    #[test]
    fn test_created_day_drops_time_of_day() {
        let issue = issue("2024-01-01T23:59:59.000+0000");
        assert_eq!(
            issue.created_day().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_created_day_rejects_garbage() {
        assert!(matches!(issue("yesterday").created_day(), Err(JiraError::ParseError(_))));
        assert!(matches!(issue("").created_day(), Err(JiraError::ParseError(_))));
    }

    #[test]
    fn test_status_compare_ignores_case() {
        assert!(issue("2024-01-01").is_in_status("in progress"));
        assert!(!issue("2024-01-01").is_in_status("Done"));
    }

    #[test]
    fn test_update_fields() {
        let labels = IssueUpdate::Labels(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(labels.to_fields(), serde_json::json!({ "labels": ["a", "b"] }));

        let due = IssueUpdate::DueDate(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(due.to_fields(), serde_json::json!({ "duedate": "2024-01-08" }));
    }
}
