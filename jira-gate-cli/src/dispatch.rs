//! # Command Dispatcher
//!
//! One function per remote operation. Each issues at most one call through a
//! [`RemoteClient`] and turns the result into a [`Report`] for the terminal.
//! Failures are returned with context and reported at the command boundary.

use anyhow::{Context, Result};
use jira_gate_client::{IssueUpdate, JiraIssue, JiraProject, JiraUser, NewIssue, RemoteClient};
use jira_gate_core::output::{print_info, print_success};

/// Text produced by a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
  /// A confirmation, printed with a success marker
  Success(String),
  /// A notice that nothing was done or found
  Info(String),
  /// Data, printed as-is
  Plain(String),
}

impl Report {
  #[cfg(test)]
  pub fn text(&self) -> &str {
    match self {
      Report::Success(text) | Report::Info(text) | Report::Plain(text) => text,
    }
  }

  /// Print to standard output
  pub fn print(&self) {
    match self {
      Report::Success(text) => print_success(text),
      Report::Info(text) => print_info(text),
      Report::Plain(text) => println!("{text}"),
    }
  }
}

/// Verify the credentials by fetching the current user
pub async fn test_connection<C: RemoteClient>(client: &C) -> Result<Report> {
  let user = client.current_user().await.context("Connection test failed")?;
  Ok(Report::Success(format!(
    "Successfully connected to JIRA!\nLogged in as: {}",
    describe_user(&user)
  )))
}

pub async fn get_issue<C: RemoteClient>(client: &C, issue_key: &str) -> Result<Report> {
  let issue = client
    .get_issue(issue_key)
    .await
    .with_context(|| format!("Failed to fetch issue {issue_key}"))?;
  Ok(Report::Plain(format_issue(&issue)))
}

pub async fn search_issues<C: RemoteClient>(client: &C, jql: &str, max_results: u32) -> Result<Report> {
  let issues = client
    .search_issues(jql, max_results)
    .await
    .context("Issue search failed")?;

  if issues.is_empty() {
    return Ok(Report::Info("No issues found.".to_string()));
  }
  Ok(Report::Plain(format_search_results(&issues)))
}

pub async fn create_issue<C: RemoteClient>(client: &C, issue: &NewIssue) -> Result<Report> {
  let created = client
    .create_issue(issue)
    .await
    .with_context(|| format!("Failed to create issue in project {}", issue.project))?;
  Ok(Report::Success(format!("Issue created successfully: {}", created.key)))
}

/// Update an issue. An empty update is reported without contacting the server.
pub async fn update_issue<C: RemoteClient>(client: &C, issue_key: &str, update: &IssueUpdate) -> Result<Report> {
  if update.is_empty() {
    return Ok(Report::Info("No fields to update.".to_string()));
  }

  client
    .update_issue(issue_key, update)
    .await
    .with_context(|| format!("Failed to update issue {issue_key}"))?;
  Ok(Report::Success(format!("Issue {issue_key} updated successfully.")))
}

pub async fn list_projects<C: RemoteClient>(client: &C) -> Result<Report> {
  let projects = client.list_projects().await.context("Failed to list projects")?;

  if projects.is_empty() {
    return Ok(Report::Info("No projects found.".to_string()));
  }
  Ok(Report::Plain(format_projects(&projects)))
}

fn describe_user(user: &JiraUser) -> String {
  match user.identifier() {
    Some(id) if !user.display_name.is_empty() && id != user.display_name => {
      format!("{} ({id})", user.display_name)
    }
    Some(id) if user.display_name.is_empty() => id.to_string(),
    _ => user.display_name.clone(),
  }
}

/// Render an issue, substituting fallbacks for absent optional fields
pub fn format_issue(issue: &JiraIssue) -> String {
  let fields = &issue.fields;
  let assignee = fields
    .assignee
    .as_ref()
    .map_or("Unassigned", |user| user.display_name.as_str());
  let reporter = fields
    .reporter
    .as_ref()
    .map_or("Unknown", |user| user.display_name.as_str());
  let priority = fields.priority.as_ref().map_or("None", |p| p.name.as_str());
  let description = fields
    .description
    .as_deref()
    .filter(|d| !d.is_empty())
    .unwrap_or("No description");

  format!(
    "\nIssue: {}\nSummary: {}\nStatus: {}\nAssignee: {}\nReporter: {}\nPriority: {}\n\nDescription:\n{}",
    issue.key, fields.summary, fields.status.name, assignee, reporter, priority, description
  )
}

pub fn format_search_results(issues: &[JiraIssue]) -> String {
  let mut out = format!("\nFound {} issue(s):\n", issues.len());
  for issue in issues {
    out.push_str(&format!(
      "\n{}: {} [{}]",
      issue.key, issue.fields.summary, issue.fields.status.name
    ));
  }
  out
}

pub fn format_projects(projects: &[JiraProject]) -> String {
  let mut out = String::from("\nAccessible projects:\n");
  for project in projects {
    out.push_str(&format!("\n{}: {}", project.key, project.name));
  }
  out
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use jira_gate_client::{CreatedIssue, JiraError};
  use serde_json::json;

  use super::*;

  /// In-memory Jira that records the calls it receives
  #[derive(Default)]
  struct FakeJira {
    issues: Vec<serde_json::Value>,
    projects: Vec<serde_json::Value>,
    fail_with_status: Option<u16>,
    calls: RefCell<Vec<String>>,
  }

  impl FakeJira {
    fn record(&self, call: String) -> Result<(), JiraError> {
      self.calls.borrow_mut().push(call);
      match self.fail_with_status {
        Some(status @ (401 | 403)) => Err(JiraError::Auth {
          status,
          message: "Unauthorized".to_string(),
        }),
        Some(status) => Err(JiraError::Remote {
          status,
          message: "Issue does not exist or you do not have permission to see it.".to_string(),
        }),
        None => Ok(()),
      }
    }

    fn issues(&self) -> Vec<JiraIssue> {
      self
        .issues
        .iter()
        .map(|value| serde_json::from_value(value.clone()).unwrap())
        .collect()
    }
  }

  impl RemoteClient for FakeJira {
    async fn current_user(&self) -> Result<JiraUser, JiraError> {
      self.record("current_user".to_string())?;
      Ok(serde_json::from_value(json!({ "name": "jdoe", "displayName": "Jane Doe" })).unwrap())
    }

    async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue, JiraError> {
      self.record(format!("get_issue {issue_key}"))?;
      self.issues().into_iter().find(|i| i.key == issue_key).ok_or(JiraError::Remote {
        status: 404,
        message: "Issue does not exist or you do not have permission to see it.".to_string(),
      })
    }

    async fn search_issues(&self, jql: &str, max_results: u32) -> Result<Vec<JiraIssue>, JiraError> {
      self.record(format!("search_issues {jql} {max_results}"))?;
      Ok(self.issues().into_iter().take(max_results as usize).collect())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<CreatedIssue, JiraError> {
      self.record(format!("create_issue {}", issue.project))?;
      Ok(serde_json::from_value(json!({ "id": "1", "key": format!("{}-1", issue.project) })).unwrap())
    }

    async fn update_issue(&self, issue_key: &str, _update: &IssueUpdate) -> Result<(), JiraError> {
      self.record(format!("update_issue {issue_key}"))
    }

    async fn list_projects(&self) -> Result<Vec<JiraProject>, JiraError> {
      self.record("list_projects".to_string())?;
      Ok(
        self
          .projects
          .iter()
          .map(|value| serde_json::from_value(value.clone()).unwrap())
          .collect(),
      )
    }
  }

  fn issue_json(key: &str, summary: &str, status: &str) -> serde_json::Value {
    json!({ "id": "1", "key": key, "fields": { "summary": summary, "status": { "name": status } } })
  }

  #[tokio::test]
  async fn test_connection_reports_user() {
    let jira = FakeJira::default();
    let report = test_connection(&jira).await.unwrap();

    assert!(matches!(report, Report::Success(_)));
    assert!(report.text().contains("Successfully connected to JIRA!"));
    assert!(report.text().contains("Logged in as: Jane Doe (jdoe)"));
  }

  #[tokio::test]
  async fn test_connection_failure_keeps_auth_error() {
    let jira = FakeJira {
      fail_with_status: Some(401),
      ..Default::default()
    };
    let err = test_connection(&jira).await.unwrap_err();

    assert!(format!("{err:#}").starts_with("Connection test failed: Authentication failed"));
    assert!(err.downcast_ref::<JiraError>().is_some_and(|e| matches!(e, JiraError::Auth { status: 401, .. })));
  }

  #[tokio::test]
  async fn test_get_issue_uses_fallbacks() {
    let jira = FakeJira {
      issues: vec![issue_json("PROJ-1", "Sparse issue", "Open")],
      ..Default::default()
    };
    let report = get_issue(&jira, "PROJ-1").await.unwrap();
    let text = report.text();

    assert!(text.contains("Issue: PROJ-1"));
    assert!(text.contains("Summary: Sparse issue"));
    assert!(text.contains("Status: Open"));
    assert!(text.contains("Assignee: Unassigned"));
    assert!(text.contains("Priority: None"));
    assert!(text.contains("Description:\nNo description"));
  }

  #[tokio::test]
  async fn test_get_issue_full_report() {
    let jira = FakeJira {
      issues: vec![json!({
        "id": "1",
        "key": "PROJ-2",
        "fields": {
          "summary": "Full issue",
          "description": "Steps to reproduce",
          "status": { "name": "In Progress" },
          "assignee": { "displayName": "Dev Eloper" },
          "reporter": { "displayName": "Product Manager" },
          "priority": { "name": "High" }
        }
      })],
      ..Default::default()
    };
    let report = get_issue(&jira, "PROJ-2").await.unwrap();

    assert_eq!(
      report.text(),
      "\nIssue: PROJ-2\nSummary: Full issue\nStatus: In Progress\nAssignee: Dev Eloper\nReporter: Product Manager\nPriority: High\n\nDescription:\nSteps to reproduce"
    );
  }

  #[tokio::test]
  async fn test_get_missing_issue_is_error() {
    let jira = FakeJira::default();
    let err = get_issue(&jira, "MISSING-1").await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.starts_with("Failed to fetch issue MISSING-1"));
    assert!(!message.contains('\n'));
  }

  #[tokio::test]
  async fn test_search_lists_matches() {
    let jira = FakeJira {
      issues: vec![
        issue_json("PROJ-1", "First", "Open"),
        issue_json("PROJ-2", "Second", "Done"),
        issue_json("PROJ-3", "Third", "Open"),
      ],
      ..Default::default()
    };
    let report = search_issues(&jira, "project = PROJ", 2).await.unwrap();

    assert_eq!(report.text(), "\nFound 2 issue(s):\n\nPROJ-1: First [Open]\nPROJ-2: Second [Done]");
    assert_eq!(jira.calls.borrow().as_slice(), ["search_issues project = PROJ 2"]);
  }

  #[tokio::test]
  async fn test_search_without_matches() {
    let jira = FakeJira::default();
    let report = search_issues(&jira, "project = NONE", 50).await.unwrap();
    assert_eq!(report, Report::Info("No issues found.".to_string()));
  }

  #[tokio::test]
  async fn test_create_reports_key() {
    let jira = FakeJira::default();
    let issue = NewIssue {
      project: "OPS".to_string(),
      summary: "Rotate keys".to_string(),
      description: None,
      issue_type: "Task".to_string(),
    };
    let report = create_issue(&jira, &issue).await.unwrap();
    assert_eq!(report, Report::Success("Issue created successfully: OPS-1".to_string()));
  }

  #[tokio::test]
  async fn test_empty_update_makes_no_call() {
    let jira = FakeJira::default();
    let report = update_issue(&jira, "PROJ-1", &IssueUpdate::new(None, Some(String::new())))
      .await
      .unwrap();

    assert_eq!(report, Report::Info("No fields to update.".to_string()));
    assert!(jira.calls.borrow().is_empty());
  }

  #[tokio::test]
  async fn test_update_reports_success() {
    let jira = FakeJira::default();
    let update = IssueUpdate::new(Some("Renamed".to_string()), None);
    let report = update_issue(&jira, "PROJ-1", &update).await.unwrap();

    assert_eq!(report.text(), "Issue PROJ-1 updated successfully.");
    assert_eq!(jira.calls.borrow().as_slice(), ["update_issue PROJ-1"]);
  }

  #[tokio::test]
  async fn test_list_projects() {
    let jira = FakeJira {
      projects: vec![
        json!({ "key": "PROJ", "name": "Project One" }),
        json!({ "key": "OPS", "name": "Operations" }),
      ],
      ..Default::default()
    };
    let report = list_projects(&jira).await.unwrap();
    assert_eq!(report.text(), "\nAccessible projects:\n\nPROJ: Project One\nOPS: Operations");

    let empty = list_projects(&FakeJira::default()).await.unwrap();
    assert_eq!(empty.text(), "No projects found.");
  }
}
