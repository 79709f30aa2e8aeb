use jira_gate_core::{Credentials, JiraAuth};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::consts::{API_PREFIX, USER_AGENT};
use crate::error::JiraError;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  /// Server URL with the REST API prefix appended
  pub(crate) api_base: Url,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client for `base_url`.
  ///
  /// A missing scheme defaults to `https://` and a trailing `/` is dropped.
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self, JiraError> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    let api_base = Url::parse(&format!("{}{}", normalize_server_url(base_url)?, API_PREFIX))
      .map_err(|_| JiraError::InvalidServerUrl(base_url.to_string()))?;

    Ok(Self { client, api_base, auth })
  }

  /// Start an authenticated request against a REST API resource.
  ///
  /// Each entry of `segments` becomes exactly one path segment, so `/` and
  /// other reserved characters inside an issue key are percent-encoded.
  pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
    let mut url = self.api_base.clone();
    // http(s) URLs always have a path, so this never fails
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    trace!("{} {}", method, url);

    let builder = self.client.request(method, url);
    match &self.auth {
      JiraAuth::Pat { token } => builder.bearer_auth(token),
      JiraAuth::Basic { email, api_token } => builder.basic_auth(email, Some(api_token)),
    }
  }

  /// Send a request and turn non-success statuses into [`JiraError`]
  pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, JiraError> {
    let response = builder.send().await?;
    let status = response.status();
    debug!("Jira responded with HTTP {}", status);

    if status.is_success() {
      Ok(response)
    } else {
      Err(JiraError::from_response(response).await)
    }
  }

  /// Send a request and decode its JSON body
  pub(crate) async fn send_json<T: DeserializeOwned>(
    &self,
    builder: RequestBuilder,
    what: &'static str,
  ) -> Result<T, JiraError> {
    self
      .send(builder)
      .await?
      .json::<T>()
      .await
      .map_err(|source| JiraError::Decode { what, source })
  }
}

/// Create a Jira client from resolved credentials
pub fn create_jira_client(credentials: &Credentials) -> Result<JiraClient, JiraError> {
  debug!(
    "Creating Jira client for {} using {} auth",
    credentials.server,
    credentials.auth_method()
  );
  JiraClient::new(&credentials.server, credentials.auth.clone())
}

/// Ensure the server URL has a scheme and no trailing slash.
fn normalize_server_url(input: &str) -> Result<String, JiraError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(JiraError::InvalidServerUrl(input.to_string()));
  }

  let lowered = trimmed.to_ascii_lowercase();
  let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url = Url::parse(&candidate).map_err(|_| JiraError::InvalidServerUrl(input.to_string()))?;
  if url.host().is_none() {
    return Err(JiraError::InvalidServerUrl(input.to_string()));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}
