//! Wire shapes of the Jira REST responses, converted into the plain models
//! before leaving the client.

use std::collections::BTreeMap;
use serde::Deserialize;

use super::{Board, Issue, Project, Transition};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
}

impl ApiErrorBody {
    pub fn summary(&self) -> Option<String> {
        let mut messages = self.error_messages.clone();
        messages.extend(self.errors.iter().map(|(field, msg)| format!("{}: {}", field, msg)));
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(", "))
        }
    }
}

/// One page of the agile board listing.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub is_last: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardsResponse {
    #[serde(default)]
    pub values: Vec<Board>,
    #[serde(default)]
    pub is_last: bool,
}

impl From<BoardsResponse> for BoardPage {
    fn from(response: BoardsResponse) -> Self {
        BoardPage {
            boards: response.values,
            is_last: response.is_last,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiProject {
    pub key: String,
    pub name: String,
}

impl From<ApiProject> for Project {
    fn from(p: ApiProject) -> Self {
        Project { key: p.key, name: p.name }
    }
}

#[derive(Debug, Deserialize)]
pub struct BoardConfiguration {
    pub filter: FilterRef,
}

#[derive(Debug, Deserialize)]
pub struct FilterRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterResponse {
    pub jql: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Vec<ApiIssue>,
}

#[derive(Debug, Deserialize)]
pub struct ApiIssue {
    pub key: String,
    pub fields: ApiIssueFields,
}

#[derive(Debug, Deserialize)]
pub struct ApiIssueFields {
    pub status: Option<Named>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub priority: Option<Named>,
    pub assignee: Option<ApiUser>,
    pub reporter: Option<ApiUser>,
    pub issuetype: Option<Named>,
    #[serde(default)]
    pub created: String,
}

#[derive(Debug, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub display_name: Option<String>,
    pub email_address: Option<String>,
}

impl ApiUser {
    fn label(self) -> Option<String> {
        self.email_address.or(self.display_name)
    }
}

impl From<ApiIssue> for Issue {
    fn from(issue: ApiIssue) -> Self {
        let fields = issue.fields;
        Issue {
            key: issue.key,
            status: fields.status.map(|s| s.name).unwrap_or_default(),
            labels: fields.labels,
            priority: fields.priority.map(|p| p.name),
            assignee: fields.assignee.and_then(ApiUser::label),
            reporter: fields.reporter.and_then(ApiUser::label),
            issue_type: fields.issuetype.map(|t| t.name),
            created: fields.created,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TransitionsResponse {
    #[serde(default)]
    pub transitions: Vec<ApiTransition>,
}

#[derive(Debug, Deserialize)]
pub struct ApiTransition {
    pub id: String,
    pub name: String,
    pub to: Option<Named>,
}

impl From<ApiTransition> for Transition {
    fn from(t: ApiTransition) -> Self {
        Transition {
            id: t.id,
            name: t.name,
            to_status: t.to.map(|s| s.name),
        }
    }
}
