//! # Current User Endpoint

use reqwest::Method;
use tracing::info;

use crate::client::JiraClient;
use crate::error::JiraError;
use crate::models::JiraUser;

impl JiraClient {
  /// Fetch the user the credentials belong to
  pub async fn current_user(&self) -> Result<JiraUser, JiraError> {
    let user: JiraUser = self.send_json(self.request(Method::GET, &["myself"]), "user").await?;
    info!("Authenticated as {}", user.display_name);
    Ok(user)
  }
}
