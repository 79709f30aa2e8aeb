//! # Jira Project Endpoints

use reqwest::Method;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::JiraProject;

impl JiraClient {
  /// List the projects visible to the authenticated user
  pub async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError> {
    self.send_json(self.request(Method::GET, &["project"]), "projects").await
  }
}
