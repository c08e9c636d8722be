use std::sync::Arc;

use crate::client::{JiraApi, JiraClient};
use crate::config::Credentials;
use crate::error::{JiraError, JiraResult};

/// Everything a bulk run shares: the authenticated session and the run mode.
pub struct RunContext {
    client: Arc<dyn JiraApi>,
    dry_run: bool,
    animate: bool,
}

impl RunContext {
    pub fn client(&self) -> &dyn JiraApi {
        self.client.as_ref()
    }

    /// In dry-run mode every read call still happens but nothing is mutated.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Whether progress dots are paced or printed at once.
    pub fn animate(&self) -> bool {
        self.animate
    }

    /// Check the credentials once; every later call reuses the same session.
    pub async fn authenticate(&self) -> JiraResult<String> {
        self.client.myself().await.map_err(|e| match e {
            auth @ JiraError::AuthError(_) => auth,
            other => JiraError::AuthError(other.to_string()),
        })
    }
}

/// Builder pattern for creating run contexts
pub struct RunContextBuilder {
    client: Option<Arc<dyn JiraApi>>,
    credentials: Option<Credentials>,
    dry_run: bool,
    animate: bool,
}

impl RunContextBuilder {
    pub fn new() -> Self {
        Self {
            client: None,
            credentials: None,
            dry_run: false,
            animate: true,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_client(mut self, client: Arc<dyn JiraApi>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn build(self) -> JiraResult<RunContext> {
        let client: Arc<dyn JiraApi> = match (self.client, self.credentials) {
            (Some(client), _) => client,
            (None, Some(credentials)) => Arc::new(JiraClient::new(&credentials)?),
            (None, None) => {
                return Err(JiraError::ConfigError(
                    "No Jira credentials configured".to_string(),
                ))
            }
        };

        Ok(RunContext {
            client,
            dry_run: self.dry_run,
            animate: self.animate,
        })
    }
}

impl Default for RunContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
