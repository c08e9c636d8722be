use crate::client::JiraApi;
use crate::constants::SEARCH_PAGE_SIZE;
use crate::error::JiraResult;
use crate::logging::log_debug;
use crate::models::Issue;

/// Collect every issue matching `jql`, in the order the service ranks them.
/// A page shorter than the page size is the last one.
pub async fn fetch_all_issues(api: &dyn JiraApi, jql: &str) -> JiraResult<Vec<Issue>> {
    let mut all_issues = Vec::new();
    let mut start_at = 0;

    loop {
        let page = api.search_issues(jql, start_at, SEARCH_PAGE_SIZE).await?;
        let page_len = page.len();
        log_debug(&format!("Fetched {} issues starting at {}", page_len, start_at));

        if page_len == 0 {
            break;
        }
        all_issues.extend(page);
        if page_len < SEARCH_PAGE_SIZE as usize {
            break;
        }
        start_at += SEARCH_PAGE_SIZE;
    }

    Ok(all_issues)
}
