//! # Credential Record
//!
//! The normalized, in-memory form of the credentials file. A record always
//! carries a server URL and exactly one authentication scheme.

use std::fmt;

/// Authentication scheme used to talk to Jira
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JiraAuth {
  /// Personal Access Token, sent as a bearer token (Jira Server/Data Center)
  Pat { token: String },
  /// Email and API token, sent as HTTP basic auth (Jira Cloud)
  Basic { email: String, api_token: String },
}

/// Discriminant of [`JiraAuth`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
  Pat,
  Basic,
}

impl fmt::Display for AuthMethod {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AuthMethod::Pat => write!(f, "PAT"),
      AuthMethod::Basic => write!(f, "BASIC"),
    }
  }
}

impl JiraAuth {
  pub const fn method(&self) -> AuthMethod {
    match self {
      JiraAuth::Pat { .. } => AuthMethod::Pat,
      JiraAuth::Basic { .. } => AuthMethod::Basic,
    }
  }
}

/// Credentials resolved from the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
  pub server: String,
  pub auth: JiraAuth,
}

impl Credentials {
  /// Which authentication scheme this record uses
  pub const fn auth_method(&self) -> AuthMethod {
    self.auth.method()
  }

  pub fn pat(&self) -> Option<&str> {
    match &self.auth {
      JiraAuth::Pat { token } => Some(token),
      JiraAuth::Basic { .. } => None,
    }
  }

  pub fn email(&self) -> Option<&str> {
    match &self.auth {
      JiraAuth::Basic { email, .. } => Some(email),
      JiraAuth::Pat { .. } => None,
    }
  }

  pub fn api_token(&self) -> Option<&str> {
    match &self.auth {
      JiraAuth::Basic { api_token, .. } => Some(api_token),
      JiraAuth::Pat { .. } => None,
    }
  }
}

/// Mask a secret for display, one `*` per character
pub fn mask_secret(secret: &str) -> String {
  "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accessors_follow_auth_scheme() {
    let pat = Credentials {
      server: "https://jira.example.com".to_string(),
      auth: JiraAuth::Pat {
        token: "abc".to_string(),
      },
    };
    assert_eq!(pat.auth_method(), AuthMethod::Pat);
    assert_eq!(pat.pat(), Some("abc"));
    assert_eq!(pat.email(), None);
    assert_eq!(pat.api_token(), None);

    let basic = Credentials {
      server: "https://x.atlassian.net".to_string(),
      auth: JiraAuth::Basic {
        email: "me@example.com".to_string(),
        api_token: "tok".to_string(),
      },
    };
    assert_eq!(basic.auth_method(), AuthMethod::Basic);
    assert_eq!(basic.pat(), None);
    assert_eq!(basic.email(), Some("me@example.com"));
    assert_eq!(basic.api_token(), Some("tok"));
  }

  #[test]
  fn test_auth_method_display() {
    assert_eq!(AuthMethod::Pat.to_string(), "PAT");
    assert_eq!(AuthMethod::Basic.to_string(), "BASIC");
  }

  #[test]
  fn test_mask_secret() {
    assert_eq!(mask_secret("abcd"), "****");
    assert_eq!(mask_secret(""), "");
  }
}
