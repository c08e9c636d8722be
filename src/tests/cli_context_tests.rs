use std::sync::Arc;

use crate::cli_context::RunContextBuilder;
use crate::config::Credentials;
use crate::error::JiraError;
use crate::tests::fake_jira::FakeJira;

#[test]
fn test_builder_requires_a_client_or_credentials() {
    let result = RunContextBuilder::new().build();
    assert!(matches!(result, Err(JiraError::ConfigError(_))));
}

#[test]
fn test_builder_with_credentials() {
    let credentials = Credentials::new("me@example.com", "token", "https://example.atlassian.net");
    let context = RunContextBuilder::new()
        .with_credentials(credentials)
        .dry_run(true)
        .build()
        .unwrap();

    assert!(context.is_dry_run());
    assert!(context.animate());
}

#[tokio::test]
async fn test_authenticate_passes_through() {
    let context = RunContextBuilder::new()
        .with_client(Arc::new(FakeJira::new()))
        .build()
        .unwrap();

    assert_eq!(context.authenticate().await.unwrap(), "Test User");
}

#[tokio::test]
async fn test_rejected_credentials_are_auth_errors() {
    let context = RunContextBuilder::new()
        .with_client(Arc::new(FakeJira::new().rejecting_auth()))
        .build()
        .unwrap();

    assert!(matches!(context.authenticate().await, Err(JiraError::AuthError(_))));
}
