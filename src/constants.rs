pub const CREDENTIALS_FILE: &str = "JiraCredentials.json";
pub const CREDENTIALS_ENV_VAR: &str = "JIRA_CREDENTIALS_FILE";

pub const BOARD_PAGE_SIZE: u32 = 50;
pub const SEARCH_PAGE_SIZE: u32 = 100;

// Jira's own date formats: JQL and the duedate field take ISO days.
pub const JIRA_DATE_FORMAT: &str = "%Y-%m-%d";
pub const CREATED_ON_FORMAT: &str = "%d-%m-%Y";
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";

pub const PROGRESS_DOTS: usize = 3;
pub const PROGRESS_TICK_MS: u64 = 400;

// Fields requested from the search endpoint
pub const ISSUE_FIELDS: &[&str] = &[
    "status",
    "labels",
    "priority",
    "assignee",
    "reporter",
    "issuetype",
    "created",
];

pub const MYSELF_PATH: &str = "/rest/api/2/myself";
pub const BOARDS_PATH: &str = "/rest/agile/1.0/board";
pub const PROJECTS_PATH: &str = "/rest/api/2/project";
pub const FILTER_PATH: &str = "/rest/api/2/filter";
// Data Center/Server search endpoint; Cloud only serves /rest/api/3/search/jql
pub const SEARCH_PATH: &str = "/rest/api/2/search";
pub const ISSUE_PATH: &str = "/rest/api/2/issue";
