pub mod jira_client;

pub use jira_client::JiraClient;

use async_trait::async_trait;

use crate::error::JiraResult;
use crate::models::{BoardPage, Issue, IssueUpdate, Project, Transition};

/// Everything the bulk commands need from a Jira instance.
///
/// `JiraClient` talks to the REST API; tests substitute a recording fake.
#[async_trait]
pub trait JiraApi: Send + Sync {
    /// Probe the session with the stored credentials, returning the account name.
    async fn myself(&self) -> JiraResult<String>;

    async fn boards(&self, start_at: u32, max_results: u32) -> JiraResult<BoardPage>;

    async fn projects(&self) -> JiraResult<Vec<Project>>;

    /// Id of the saved filter backing a board.
    async fn board_filter_id(&self, board_id: u64) -> JiraResult<String>;

    async fn filter_jql(&self, filter_id: &str) -> JiraResult<String>;

    /// Targets Jira Data Center/Server `POST /rest/api/2/search`; Jira Cloud
    /// has retired it in favour of `/rest/api/3/search/jql`.
    async fn search_issues(&self, jql: &str, start_at: u32, max_results: u32) -> JiraResult<Vec<Issue>>;

    async fn update_issue(&self, key: &str, update: &IssueUpdate) -> JiraResult<()>;

    async fn transitions(&self, key: &str) -> JiraResult<Vec<Transition>>;

    async fn transition_issue(&self, key: &str, transition_id: &str) -> JiraResult<()>;
}
