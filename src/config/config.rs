use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::Deserialize;

use crate::constants::{CREDENTIALS_ENV_VAR, CREDENTIALS_FILE};
use crate::error::{ErrorContext, JiraError, JiraResult};

/// Connection settings read from the credentials file.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
    pub jira_url: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    email: Option<String>,
    api_token: Option<String>,
    jira_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl Credentials {
    pub fn new(email: &str, api_token: &str, jira_url: &str) -> Self {
        Self {
            email: email.to_string(),
            api_token: api_token.to_string(),
            jira_url: jira_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Resolve which credentials file to read: an explicit path wins, then
/// the environment override, then `JiraCredentials.json` in the working directory.
pub fn credentials_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Ok(path) = env::var(CREDENTIALS_ENV_VAR) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    PathBuf::from(CREDENTIALS_FILE)
}

pub fn load_credentials(path: &Path) -> JiraResult<Credentials> {
    if !path.exists() {
        return Err(JiraError::CredentialsNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_credentials(&contents)
}

pub fn parse_credentials(contents: &str) -> JiraResult<Credentials> {
    let file: CredentialsFile = serde_json::from_str(contents)
        .map_err(|e| JiraError::ConfigError(e.to_string()))?;

    let email = required(file.email, "email")?;
    let api_token = required(file.api_token, "api_token")?;
    let jira_url = required(file.jira_url, "jira_url")?;

    if !jira_url.starts_with("http://") && !jira_url.starts_with("https://") {
        return Err(JiraError::ConfigError(format!(
            "jira_url must be an http(s) URL, got '{}'",
            jira_url
        )));
    }

    Ok(Credentials::new(&email, &api_token, &jira_url)
        .with_timeout(file.timeout_secs.map(Duration::from_secs)))
}

fn required(value: Option<String>, field: &str) -> JiraResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(JiraError::ConfigError(format!(
            "Missing required field '{}' in credentials file.",
            field
        ))),
    }
}
