use std::fmt;

use chrono::{Days, NaiveDate};

use crate::constants::{CREATED_ON_FORMAT, JIRA_DATE_FORMAT};
use crate::error::{JiraError, JiraResult};
use crate::jira_error;

/// Issue fields that can be filtered from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Status,
    Assignee,
    Reporter,
    IssueType,
    Priority,
    Labels,
    Created,
}

impl FilterField {
    /// Get the JQL field name
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Assignee => "assignee",
            Self::Reporter => "reporter",
            Self::IssueType => "issuetype",
            Self::Priority => "priority",
            Self::Labels => "labels",
            Self::Created => "created",
        }
    }
}

/// A single conjunctive JQL clause
#[derive(Debug, Clone, PartialEq)]
pub enum JqlClause {
    Equals(FilterField, String),
    In(FilterField, Vec<String>),
    /// Half-open day interval: `created >= day AND created < next_day`.
    CreatedOn { day: NaiveDate, next_day: NaiveDate },
}

impl fmt::Display for JqlClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equals(field, value) => write!(f, "{} = {}", field.field_name(), quote(value)),
            Self::In(field, values) => {
                let list: Vec<String> = values.iter().map(|v| quote(v)).collect();
                write!(f, "{} IN ({})", field.field_name(), list.join(", "))
            }
            Self::CreatedOn { day, next_day } => {
                let field = FilterField::Created.field_name();
                write!(
                    f,
                    "{} >= \"{}\" AND {} < \"{}\"",
                    field,
                    day.format(JIRA_DATE_FORMAT),
                    field,
                    next_day.format(JIRA_DATE_FORMAT)
                )
            }
        }
    }
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

/// Optional filters narrowing the base query. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilters {
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub issue_type: Option<String>,
    pub priority: Option<String>,
    /// Comma-separated label list
    pub labels: Option<String>,
    /// Day in `DD-MM-YYYY` form
    pub created_on: Option<String>,
}

impl IssueFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, value: &str) -> Self {
        self.status = Some(value.to_string());
        self
    }

    pub fn assignee(mut self, value: &str) -> Self {
        self.assignee = Some(value.to_string());
        self
    }

    pub fn reporter(mut self, value: &str) -> Self {
        self.reporter = Some(value.to_string());
        self
    }

    pub fn issue_type(mut self, value: &str) -> Self {
        self.issue_type = Some(value.to_string());
        self
    }

    pub fn priority(mut self, value: &str) -> Self {
        self.priority = Some(value.to_string());
        self
    }

    pub fn labels(mut self, value: &str) -> Self {
        self.labels = Some(value.to_string());
        self
    }

    pub fn created_on(mut self, value: &str) -> Self {
        self.created_on = Some(value.to_string());
        self
    }

    /// Clauses in fixed emission order: status, assignee, reporter,
    /// issue type, priority, labels, created-on.
    pub fn clauses(&self) -> JiraResult<Vec<JqlClause>> {
        let mut clauses = Vec::new();

        let scalars = [
            (FilterField::Status, &self.status),
            (FilterField::Assignee, &self.assignee),
            (FilterField::Reporter, &self.reporter),
            (FilterField::IssueType, &self.issue_type),
            (FilterField::Priority, &self.priority),
        ];
        for (field, value) in scalars {
            if let Some(value) = non_empty(value) {
                clauses.push(JqlClause::Equals(field, value.to_string()));
            }
        }

        if let Some(labels) = non_empty(&self.labels) {
            // Blank entries stay in the list so the clause is never dropped.
            let list: Vec<String> = labels.split(',').map(|l| l.trim().to_string()).collect();
            clauses.push(JqlClause::In(FilterField::Labels, list));
        }

        if let Some(created_on) = non_empty(&self.created_on) {
            let day = parse_created_on(created_on)?;
            clauses.push(JqlClause::CreatedOn { day, next_day: day_after(day, created_on)? });
        }

        Ok(clauses)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn parse_created_on(value: &str) -> JiraResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), CREATED_ON_FORMAT).map_err(|e| {
        JiraError::ParseError(format!(
            "--created-on expects DD-MM-YYYY, got '{}': {}",
            value, e
        ))
    })
}

fn day_after(day: NaiveDate, raw: &str) -> JiraResult<NaiveDate> {
    day.checked_add_days(Days::new(1))
        .ok_or_else(|| jira_error!(ParseError, "--created-on '{}' has no following day", raw))
}

/// Append the filter clauses to the base query, joined with `AND`.
/// Without any filters the base query comes back untouched.
pub fn build_jql(base_jql: &str, filters: &IssueFilters) -> JiraResult<String> {
    let clauses = filters.clauses()?;
    if clauses.is_empty() {
        return Ok(base_jql.to_string());
    }

    let joined: Vec<String> = clauses.iter().map(|c| c.to_string()).collect();
    Ok(format!("{} AND {}", base_jql, joined.join(" AND ")))
}
