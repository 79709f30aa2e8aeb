//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations,
//! including fetching, creating, and updating Jira issues.

use reqwest::Method;
use tracing::{debug, info};

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{CreateIssueRequest, CreatedIssue, IssueUpdate, JiraIssue, NewIssue, UpdateIssueRequest};

impl JiraClient {
  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    debug!("Fetching issue {}", issue_key);
    self
      .send_json(self.request(Method::GET, &["issue", issue_key]), "issue")
      .await
  }

  /// Create an issue and return its generated key
  pub async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError> {
    debug!("Creating {} in project {}", issue.issue_type, issue.project);
    let payload = CreateIssueRequest::from(issue);
    let created: CreatedIssue = self
      .send_json(self.request(Method::POST, &["issue"]).json(&payload), "created issue")
      .await?;
    info!("Created issue {}", created.key);
    Ok(created)
  }

  /// Update the given fields of an issue
  pub async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<(), JiraError> {
    debug!("Updating issue {}", issue_key);
    let payload = UpdateIssueRequest { fields: update };
    self
      .send(
        self
          .request(Method::PUT, &["issue", issue_key])
          .json(&payload),
      )
      .await?;
    info!("Updated issue {}", issue_key);
    Ok(())
  }
}
