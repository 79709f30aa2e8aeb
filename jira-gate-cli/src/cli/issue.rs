//! # Issue Command
//!
//! Fetch, search, create, and update Jira issues. Each subcommand resolves the
//! credentials, builds a client, and makes a single remote call.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use jira_gate_client::consts::DEFAULT_MAX_RESULTS;
use jira_gate_client::{IssueUpdate, NewIssue};

use crate::clients::create_jira_runtime_and_client;
use crate::dispatch;

/// Command for issue operations
#[derive(Args)]
pub struct IssueArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: IssueSubcommands,
}

/// Subcommands for the issue command
#[derive(Subcommand)]
pub enum IssueSubcommands {
  /// Get details of a JIRA issue
  #[command(long_about = "Display a JIRA issue.\n\n\
                   Shows the key, summary, status, assignee, reporter, priority, and\n\
                   description of the issue.")]
  Get {
    /// The issue key (e.g., PROJ-123)
    issue_key: String,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
  },

  /// Search issues using JQL
  Search {
    /// JQL query (e.g., "project = PROJ AND status = Open")
    jql: String,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
  },

  /// Create a new JIRA issue
  Create {
    /// Project key
    #[arg(long)]
    project: String,

    /// Issue summary
    #[arg(long)]
    summary: String,

    /// Issue description
    #[arg(long, default_value = "")]
    description: String,

    /// Issue type
    #[arg(long, default_value = "Task")]
    issue_type: String,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
  },

  /// Update an existing JIRA issue
  #[command(long_about = "Update the summary and/or description of a JIRA issue.\n\n\
                   Only the fields you pass are changed. Nothing is sent when neither\n\
                   --summary nor --description is given.")]
  Update {
    /// The issue key (e.g., PROJ-123)
    issue_key: String,

    /// Update summary
    #[arg(long)]
    summary: Option<String>,

    /// Update description
    #[arg(long)]
    description: Option<String>,

    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
  },
}

pub(crate) fn handle_issue_command(issue: IssueArgs) -> Result<()> {
  match issue.subcommand {
    IssueSubcommands::Get { issue_key, config } => {
      let (rt, client) = create_jira_runtime_and_client(config.as_deref())?;
      rt.block_on(dispatch::get_issue(&client, &issue_key))?.print();
    }
    IssueSubcommands::Search {
      jql,
      max_results,
      config,
    } => {
      let (rt, client) = create_jira_runtime_and_client(config.as_deref())?;
      rt.block_on(dispatch::search_issues(&client, &jql, max_results))?.print();
    }
    IssueSubcommands::Create {
      project,
      summary,
      description,
      issue_type,
      config,
    } => {
      let new_issue = NewIssue {
        project,
        summary,
        description: Some(description).filter(|d| !d.is_empty()),
        issue_type,
      };
      let (rt, client) = create_jira_runtime_and_client(config.as_deref())?;
      rt.block_on(dispatch::create_issue(&client, &new_issue))?.print();
    }
    IssueSubcommands::Update {
      issue_key,
      summary,
      description,
      config,
    } => {
      let update = IssueUpdate::new(summary, description);
      let (rt, client) = create_jira_runtime_and_client(config.as_deref())?;
      rt.block_on(dispatch::update_issue(&client, &issue_key, &update))?.print();
    }
  }
  Ok(())
}
