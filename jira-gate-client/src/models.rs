use serde::{Deserialize, Serialize};

/// Represents a Jira user
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  /// Username on Server/Data Center
  pub name: Option<String>,
  /// Account id on Cloud
  pub account_id: Option<String>,
  #[serde(default)]
  pub display_name: String,
  pub email_address: Option<String>,
}

impl JiraUser {
  /// Stable identifier for the user: username, then account id, then email
  pub fn identifier(&self) -> Option<&str> {
    self
      .name
      .as_deref()
      .or(self.account_id.as_deref())
      .or(self.email_address.as_deref())
  }
}

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
  #[allow(dead_code)]
  pub id: String,
  pub key: String,
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  pub description: Option<String>,
  pub status: JiraIssueStatus,
  pub assignee: Option<JiraUser>,
  pub reporter: Option<JiraUser>,
  pub priority: Option<JiraPriority>,
}

/// Represents a Jira issue status
#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssueStatus {
  #[allow(dead_code)]
  pub id: Option<String>,
  pub name: String,
}

/// Represents a Jira issue priority
#[derive(Debug, Clone, Deserialize)]
pub struct JiraPriority {
  pub name: String,
}

/// Response body of the search endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraSearchResults {
  #[serde(default)]
  pub issues: Vec<JiraIssue>,
  pub total: Option<u64>,
}

/// Represents a Jira project
#[derive(Debug, Clone, Deserialize)]
pub struct JiraProject {
  #[allow(dead_code)]
  pub id: Option<String>,
  pub key: String,
  pub name: String,
}

/// The fields of an issue to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
  pub project: String,
  pub summary: String,
  pub description: Option<String>,
  pub issue_type: String,
}

/// Reference returned after creating an issue
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
  #[allow(dead_code)]
  pub id: String,
  pub key: String,
}

/// Fields to change on an existing issue. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl IssueUpdate {
  /// Build an update, dropping empty values
  pub fn new(summary: Option<String>, description: Option<String>) -> Self {
    Self {
      summary: summary.filter(|s| !s.is_empty()),
      description: description.filter(|d| !d.is_empty()),
    }
  }

  pub const fn is_empty(&self) -> bool {
    self.summary.is_none() && self.description.is_none()
  }
}

/// Payload for `POST /issue`
#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueRequest<'a> {
  pub fields: CreateIssueFields<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueFields<'a> {
  pub project: KeyRef<'a>,
  pub summary: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<&'a str>,
  pub issuetype: NameRef<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct KeyRef<'a> {
  pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameRef<'a> {
  pub name: &'a str,
}

impl<'a> From<&'a NewIssue> for CreateIssueRequest<'a> {
  fn from(issue: &'a NewIssue) -> Self {
    Self {
      fields: CreateIssueFields {
        project: KeyRef { key: &issue.project },
        summary: &issue.summary,
        description: issue.description.as_deref().filter(|d| !d.is_empty()),
        issuetype: NameRef {
          name: &issue.issue_type,
        },
      },
    }
  }
}

/// Payload for `PUT /issue/{key}`
#[derive(Debug, Serialize)]
pub(crate) struct UpdateIssueRequest<'a> {
  pub fields: &'a IssueUpdate,
}
