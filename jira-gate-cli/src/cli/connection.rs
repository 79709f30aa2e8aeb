//! # Test Command
//!
//! Confirms the configured server accepts the configured credentials.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::clients::create_jira_runtime_and_client;
use crate::dispatch;

/// Arguments for the connection test
#[derive(Args)]
pub struct TestArgs {
  /// Custom config file path
  #[arg(long)]
  pub config: Option<PathBuf>,
}

pub(crate) fn handle_test_command(args: &TestArgs) -> Result<()> {
  let (rt, client) = create_jira_runtime_and_client(args.config.as_deref())?;
  rt.block_on(dispatch::test_connection(&client))?.print();
  Ok(())
}
