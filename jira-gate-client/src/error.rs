//! Error taxonomy for remote Jira calls.

use std::collections::BTreeMap;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by [`crate::RemoteClient`] operations
#[derive(Debug, Error)]
pub enum JiraError {
  /// The server rejected the credentials (HTTP 401/403)
  #[error("Authentication failed (HTTP {status}): {message}")]
  Auth { status: u16, message: String },

  /// Any other non-success response, e.g. a missing issue or bad JQL
  #[error("{message} (HTTP {status})")]
  Remote { status: u16, message: String },

  /// The server could not be reached
  #[error("Failed to reach Jira")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a body we could not decode
  #[error("Failed to parse {what} response")]
  Decode {
    what: &'static str,
    #[source]
    source: reqwest::Error,
  },

  /// The configured server is not a usable URL
  #[error("Invalid Jira server URL '{0}'")]
  InvalidServerUrl(String),
}

impl JiraError {
  /// Build an error from a non-success response, reading Jira's error body
  pub(crate) async fn from_response(response: Response) -> Self {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);

    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => JiraError::Auth {
        status: status.as_u16(),
        message,
      },
      _ => JiraError::Remote {
        status: status.as_u16(),
        message,
      },
    }
  }
}

/// Shape of Jira's standard error payload
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JiraErrorBody {
  #[serde(default)]
  error_messages: Vec<String>,
  #[serde(default)]
  errors: BTreeMap<String, String>,
}

/// Flatten an error body into one line, falling back to the status text
fn error_message(status: StatusCode, body: &str) -> String {
  let parsed: JiraErrorBody = serde_json::from_str(body).unwrap_or_default();

  let parts: Vec<String> = parsed
    .error_messages
    .into_iter()
    .chain(parsed.errors.into_iter().map(|(field, msg)| format!("{field}: {msg}")))
    .map(|msg| msg.split_whitespace().collect::<Vec<_>>().join(" "))
    .filter(|msg| !msg.is_empty())
    .collect();

  if parts.is_empty() {
    status.canonical_reason().unwrap_or("Unexpected response").to_string()
  } else {
    parts.join("; ")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_message_from_error_messages() {
    let body = r#"{"errorMessages":["Issue does not exist or you do not have permission to see it."],"errors":{}}"#;
    assert_eq!(
      error_message(StatusCode::NOT_FOUND, body),
      "Issue does not exist or you do not have permission to see it."
    );
  }

  #[test]
  fn test_error_message_joins_field_errors() {
    let body = r#"{"errorMessages":[],"errors":{"project":"valid project is required","summary":"required"}}"#;
    assert_eq!(
      error_message(StatusCode::BAD_REQUEST, body),
      "project: valid project is required; summary: required"
    );
  }

  #[test]
  fn test_error_message_collapses_multiline_text() {
    let body = r#"{"errorMessages":["Error in the JQL Query:\nThe character '=' is a reserved JQL character."]}"#;
    let message = error_message(StatusCode::BAD_REQUEST, body);
    assert!(!message.contains('\n'));
    assert!(message.starts_with("Error in the JQL Query:"));
  }

  #[test]
  fn test_error_message_falls_back_to_status() {
    assert_eq!(error_message(StatusCode::UNAUTHORIZED, "<html>nope</html>"), "Unauthorized");
    assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
  }
}
