//! # jira-gate core
//!
//! Credential file resolution and shared terminal helpers for the jira-gate
//! command-line client.

pub mod config;
pub mod creds;
pub mod ini;
pub mod output;
pub mod prompts;

pub use config::{ConfigError, ConfigFile, default_config_path, resolve_credentials};
pub use creds::{AuthMethod, Credentials, JiraAuth, mask_secret};
