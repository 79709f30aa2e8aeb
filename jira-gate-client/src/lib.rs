//! # Jira API Client
//!
//! Provides the Jira REST API calls jira-gate needs: the current user, issue
//! fetch/search/create/update, and project listing. Requests authenticate
//! with either a Personal Access Token (bearer) or email + API token (basic).

mod client;
pub mod consts;
mod endpoints;
mod error;
pub mod models;
mod remote;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use error::JiraError;
// Re-export models
pub use models::{
  CreatedIssue, IssueUpdate, JiraIssue, JiraIssueFields, JiraIssueStatus, JiraPriority, JiraProject, JiraUser,
  NewIssue,
};
pub use remote::RemoteClient;
