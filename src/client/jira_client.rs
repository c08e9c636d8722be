use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};

use super::JiraApi;
use crate::config::Credentials;
use crate::constants::{
    BOARDS_PATH, FILTER_PATH, ISSUE_FIELDS, ISSUE_PATH, MYSELF_PATH, PROJECTS_PATH, SEARCH_PATH,
};
use crate::error::{JiraError, JiraResult};
use crate::logging::log_debug;
use crate::models::api::*;
use crate::models::*;

pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(credentials: &Credentials) -> JiraResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = credentials.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: credentials.jira_url.trim_end_matches('/').to_string(),
            email: credentials.email.clone(),
            api_token: credentials.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log_debug(&format!("{} {}", method, url));
        self.client
            .request(method, url)
            .basic_auth(&self.email, Some(&self.api_token))
    }

    async fn send(&self, request: RequestBuilder) -> JiraResult<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.summary())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                JiraError::AuthError(format!("HTTP {}: {}", status.as_u16(), detail))
            }
            _ => JiraError::ApiError(format!("HTTP {}: {}", status.as_u16(), detail)),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, request: RequestBuilder) -> JiraResult<T> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl JiraApi for JiraClient {
    async fn myself(&self) -> JiraResult<String> {
        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Myself {
            display_name: Option<String>,
            email_address: Option<String>,
        }

        let me: Myself = self.get_json(self.request(Method::GET, MYSELF_PATH)).await?;
        Ok(me
            .display_name
            .or(me.email_address)
            .unwrap_or_else(|| self.email.clone()))
    }

    async fn boards(&self, start_at: u32, max_results: u32) -> JiraResult<BoardPage> {
        let request = self
            .request(Method::GET, BOARDS_PATH)
            .query(&[("startAt", start_at), ("maxResults", max_results)]);
        let response: BoardsResponse = self.get_json(request).await?;
        Ok(response.into())
    }

    async fn projects(&self) -> JiraResult<Vec<Project>> {
        let projects: Vec<ApiProject> = self.get_json(self.request(Method::GET, PROJECTS_PATH)).await?;
        Ok(projects.into_iter().map(Project::from).collect())
    }

    async fn board_filter_id(&self, board_id: u64) -> JiraResult<String> {
        let path = format!("{}/{}/configuration", BOARDS_PATH, board_id);
        let config: BoardConfiguration = self.get_json(self.request(Method::GET, &path)).await?;
        Ok(config.filter.id)
    }

    async fn filter_jql(&self, filter_id: &str) -> JiraResult<String> {
        let path = format!("{}/{}", FILTER_PATH, filter_id);
        let filter: FilterResponse = self.get_json(self.request(Method::GET, &path)).await?;
        Ok(filter.jql)
    }

    async fn search_issues(&self, jql: &str, start_at: u32, max_results: u32) -> JiraResult<Vec<Issue>> {
        let body = json!({
            "jql": jql,
            "startAt": start_at,
            "maxResults": max_results,
            "fields": ISSUE_FIELDS,
        });
        let request = self.request(Method::POST, SEARCH_PATH).json(&body);
        let response: SearchResponse = self.get_json(request).await?;
        Ok(response.issues.into_iter().map(Issue::from).collect())
    }

    async fn update_issue(&self, key: &str, update: &IssueUpdate) -> JiraResult<()> {
        let path = format!("{}/{}", ISSUE_PATH, key);
        let body = json!({ "fields": update.to_fields() });
        self.send(self.request(Method::PUT, &path).json(&body)).await?;
        Ok(())
    }

    async fn transitions(&self, key: &str) -> JiraResult<Vec<Transition>> {
        let path = format!("{}/{}/transitions", ISSUE_PATH, key);
        let response: TransitionsResponse = self.get_json(self.request(Method::GET, &path)).await?;
        Ok(response.transitions.into_iter().map(Transition::from).collect())
    }

    async fn transition_issue(&self, key: &str, transition_id: &str) -> JiraResult<()> {
        let path = format!("{}/{}/transitions", ISSUE_PATH, key);
        let body: Value = json!({ "transition": { "id": transition_id } });
        self.send(self.request(Method::POST, &path).json(&body)).await?;
        Ok(())
    }
}
