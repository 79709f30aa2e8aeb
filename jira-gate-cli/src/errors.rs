//! # Failure Reporting
//!
//! Every command failure ends here: one line on standard error, plus a
//! remediation hint when the config file is missing.

use anyhow::Error;
use jira_gate_core::ConfigError;
use jira_gate_core::output::{Stream, format_command_for, print_error};
use tracing::debug;

/// Command suggested when no config file exists
pub const INIT_COMMAND: &str = "jira-gate config init";

/// Single-line description of an error and its causes
pub fn failure_message(err: &Error) -> String {
  format!("{err:#}").lines().map(str::trim).collect::<Vec<_>>().join(" ")
}

/// Hint for errors the user can fix with another command, styled for stderr
pub fn remediation_hint(err: &Error) -> Option<String> {
  err
    .chain()
    .find_map(|cause| cause.downcast_ref::<ConfigError>())
    .filter(|config_err| matches!(config_err, ConfigError::NotFound { .. }))
    .map(|_| format!("Run '{}' to create a config file.", format_command_for(INIT_COMMAND, Stream::Stderr)))
}

/// Print a failure to standard error
pub fn report_failure(err: &Error) {
  debug!("Command failed: {err:?}");
  print_error(&failure_message(err));
  if let Some(hint) = remediation_hint(err) {
    eprintln!("{hint}");
  }
}
