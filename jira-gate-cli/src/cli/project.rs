//! # Project Command

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::clients::create_jira_runtime_and_client;
use crate::dispatch;

/// Command for project operations
#[derive(Args)]
pub struct ProjectArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ProjectSubcommands,
}

/// Subcommands for the project command
#[derive(Subcommand)]
pub enum ProjectSubcommands {
  /// List all accessible projects
  List {
    /// Custom config file path
    #[arg(long)]
    config: Option<PathBuf>,
  },
}

pub(crate) fn handle_project_command(project: &ProjectArgs) -> Result<()> {
  match &project.subcommand {
    ProjectSubcommands::List { config } => {
      let (rt, client) = create_jira_runtime_and_client(config.as_deref())?;
      rt.block_on(dispatch::list_projects(&client))?.print();
      Ok(())
    }
  }
}
