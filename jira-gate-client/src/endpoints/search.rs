//! # Jira Search Endpoint
//!
//! Jira Cloud only serves `GET /search/jql` and answers the older `GET /search`
//! with 410 Gone. Server and Data Center releases without `/search/jql` answer
//! it with 404, so that status alone triggers the legacy endpoint.

use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{JiraIssue, JiraSearchResults};

/// Fields requested for each search hit
const SEARCH_FIELDS: &str = "summary,status";

impl JiraClient {
  /// Search issues with JQL, returning at most `max_results` of them
  pub async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<JiraIssue>, JiraError> {
    debug!("Searching issues (max {}): {}", max_results, jql);

    let results = match self.run_search(&["search", "jql"], jql, max_results).await {
      Err(JiraError::Remote { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
        debug!("/search/jql is not available, falling back to /search");
        self.run_search(&["search"], jql, max_results).await?
      }
      other => other?,
    };

    debug!(
      "Search returned {} issue(s){}",
      results.issues.len(),
      results.total.map(|t| format!(" of {t} total")).unwrap_or_default()
    );
    Ok(results.issues)
  }

  async fn run_search(&self, segments: &[&str], jql: &str, max_results: u32) -> Result<JiraSearchResults, JiraError> {
    let max_results = max_results.to_string();
    let builder = self.request(Method::GET, segments).query(&[
      ("jql", jql),
      ("maxResults", max_results.as_str()),
      ("fields", SEARCH_FIELDS),
    ]);
    self.send_json(builder, "search").await
  }
}

#[cfg(test)]
mod tests {
  use jira_gate_core::JiraAuth;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::error::JiraError;

  fn pat_client(uri: &str) -> JiraClient {
    JiraClient::new(uri, JiraAuth::Pat { token: "pat".to_string() }).unwrap()
  }

  fn gone() -> ResponseTemplate {
    ResponseTemplate::new(410).set_body_json(serde_json::json!({
        "errorMessages": ["The requested API has been removed. Please migrate to the /rest/api/3/search/jql API."],
        "errors": {}
    }))
  }

  #[tokio::test]
  async fn test_search_uses_jql_endpoint() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = pat_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .and(query_param("jql", "project = PROJ ORDER BY key"))
      .and(query_param("maxResults", "2"))
      .and(query_param("fields", "summary,status"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "isLast": false,
          "nextPageToken": "CAEaAggD",
          "issues": [
              { "id": "1", "key": "PROJ-1", "fields": { "summary": "First", "status": { "name": "Open" } } },
              { "id": "2", "key": "PROJ-2", "fields": { "summary": "Second", "status": { "name": "Done" } } }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(gone())
      .expect(0)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues("project = PROJ ORDER BY key", 2).await?;
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[1].key, "PROJ-2");
    assert_eq!(issues[1].fields.status.name, "Done");
    Ok(())
  }

  #[tokio::test]
  async fn test_search_falls_back_when_jql_endpoint_is_missing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = pat_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(404))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .and(query_param("jql", "project = PROJ"))
      .and(query_param("maxResults", "50"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "startAt": 0,
          "maxResults": 50,
          "total": 1,
          "issues": [
              { "id": "1", "key": "PROJ-1", "fields": { "summary": "First", "status": { "name": "Open" } } }
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let issues = client.search_issues("project = PROJ", 50).await?;
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, "PROJ-1");
    Ok(())
  }

  #[tokio::test]
  async fn test_search_does_not_fall_back_on_other_errors() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = pat_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": ["Error in the JQL Query: Expecting either 'OR' or 'AND' but got 'foo'."],
          "errors": {}
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(gone())
      .expect(0)
      .mount(&mock_server)
      .await;

    let err = client.search_issues("project = PROJ foo", 50).await.unwrap_err();
    assert!(matches!(err, JiraError::Remote { status: 400, .. }));
    assert!(err.to_string().contains("Error in the JQL Query"));
    Ok(())
  }

  #[tokio::test]
  async fn test_search_reports_removed_legacy_endpoint() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = pat_client(&mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search/jql"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/search"))
      .respond_with(gone())
      .expect(1)
      .mount(&mock_server)
      .await;

    let err = client.search_issues("project = PROJ", 50).await.unwrap_err();
    assert!(matches!(err, JiraError::Remote { status: 410, .. }));
    assert!(err.to_string().contains("/search/jql"));
    Ok(())
  }
}
