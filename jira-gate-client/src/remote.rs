//! # Remote Client Interface
//!
//! The operations the command dispatcher needs from a Jira server. The
//! reqwest-backed [`JiraClient`] is the production implementation; tests can
//! substitute an in-memory one.

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::{CreatedIssue, IssueUpdate, JiraIssue, JiraProject, JiraUser, NewIssue};

/// Operations against a Jira-compatible REST API
#[allow(async_fn_in_trait)]
pub trait RemoteClient {
  /// Identity of the authenticated user
  async fn current_user(&self) -> Result<JiraUser, JiraError>;

  /// Fetch one issue by key, e.g. `PROJ-123`
  async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError>;

  /// Run a JQL query, returning at most `max_results` issues
  async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<JiraIssue>, JiraError>;

  /// Create an issue
  async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError>;

  /// Change the summary and/or description of an issue
  async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<(), JiraError>;

  /// Projects visible to the authenticated user
  async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError>;
}

impl RemoteClient for JiraClient {
  async fn current_user(&self) -> Result<JiraUser, JiraError> {
    JiraClient::current_user(self).await
  }

  async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
    JiraClient::get_issue(self, issue_key).await
  }

  async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<JiraIssue>, JiraError> {
    JiraClient::search_issues(self, jql, max_results).await
  }

  async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError> {
    JiraClient::create_issue(self, issue).await
  }

  async fn update_issue(&self, issue_key: &str, update: &IssueUpdate) -> Result<(), JiraError> {
    JiraClient::update_issue(self, issue_key, update).await
  }

  async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError> {
    JiraClient::list_projects(self).await
  }
}
