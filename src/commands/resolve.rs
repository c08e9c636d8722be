use crate::client::JiraApi;
use crate::constants::BOARD_PAGE_SIZE;
use crate::error::JiraResult;
use crate::jira_error;
use crate::formatting::print_warning;
use crate::logging::log_info;

/// What the base query is derived from
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    Board(String),
    Project(String),
}

impl Target {
    pub fn describe(&self) -> String {
        match self {
            Self::Board(name) => format!("Board '{}'", name),
            Self::Project(name) => format!("Project '{}'", name),
        }
    }
}

/// Pick the resolution target. A board name wins over a project name;
/// the ignored project is reported rather than silently dropped.
pub fn select_target(board_name: Option<&str>, project_name: Option<&str>) -> Option<Target> {
    let board_name = board_name.filter(|n| !n.is_empty());
    let project_name = project_name.filter(|n| !n.is_empty());

    match (board_name, project_name) {
        (Some(board), Some(project)) => {
            print_warning(&format!(
                "Both --board-name and --project given; using board '{}' and ignoring project '{}'.",
                board, project
            ));
            Some(Target::Board(board.to_string()))
        }
        (Some(board), None) => Some(Target::Board(board.to_string())),
        (None, Some(project)) => Some(Target::Project(project.to_string())),
        (None, None) => None,
    }
}

/// Page through every board looking for an exact, case-sensitive name match.
pub async fn find_board_id(api: &dyn JiraApi, name: &str) -> JiraResult<Option<u64>> {
    let mut start_at = 0;
    loop {
        let page = api.boards(start_at, BOARD_PAGE_SIZE).await?;
        if page.boards.is_empty() {
            return Ok(None);
        }

        if let Some(board) = page.boards.iter().find(|b| b.name == name) {
            log_info(&format!("Board '{}' resolved to id {}", name, board.id));
            return Ok(Some(board.id));
        }

        if page.is_last {
            return Ok(None);
        }
        start_at += page.boards.len() as u32;
    }
}

/// Case-insensitive match over the full project list.
pub async fn find_project_key(api: &dyn JiraApi, name: &str) -> JiraResult<Option<String>> {
    let wanted = name.to_lowercase();
    let projects = api.projects().await?;
    Ok(projects
        .into_iter()
        .find(|p| p.name.to_lowercase() == wanted)
        .map(|p| p.key))
}

pub async fn board_jql(api: &dyn JiraApi, board_id: u64) -> JiraResult<String> {
    let filter_id = api.board_filter_id(board_id).await?;
    api.filter_jql(&filter_id).await
}

pub fn project_jql(project_key: &str) -> String {
    format!("project = {} ORDER BY Rank ASC", project_key)
}

/// Confirm the target exists and return its base query.
pub async fn resolve_base_jql(api: &dyn JiraApi, target: &Target) -> JiraResult<String> {
    match target {
        Target::Board(name) => {
            let board_id = find_board_id(api, name)
                .await?
                .ok_or_else(|| jira_error!(NotFound, target.describe()))?;
            board_jql(api, board_id).await
        }
        Target::Project(name) => {
            let key = find_project_key(api, name)
                .await?
                .ok_or_else(|| jira_error!(NotFound, target.describe()))?;
            Ok(project_jql(&key))
        }
    }
}
