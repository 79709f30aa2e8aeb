//! # Client Creation
//!
//! Resolves credentials and builds the authenticated Jira client together with
//! the runtime that drives it.

use std::path::Path;

use anyhow::{Context, Result};
use jira_gate_client::{JiraClient, create_jira_client};
use jira_gate_core::resolve_credentials;
use tokio::runtime::{Builder, Runtime};

/// Creates a single-threaded tokio runtime and an authenticated Jira client
///
/// Credentials come from `config_path`, or the default config file when
/// `None`. Config errors are passed through unchanged so the caller can tell
/// a missing file from an invalid one.
pub fn create_jira_runtime_and_client(config_path: Option<&Path>) -> Result<(Runtime, JiraClient)> {
  let credentials = resolve_credentials(config_path)?;
  let client = create_jira_client(&credentials).context("Failed to create Jira client")?;
  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  Ok((rt, client))
}
