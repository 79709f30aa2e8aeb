//! Temporary credentials files for testing

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// File name used for guarded config files
const TEST_CONFIG_FILE_NAME: &str = "jira-gate.config";

/// RAII guard for a credentials file written into its own temporary directory
///
/// The file and its directory are removed when the guard is dropped. HOME is
/// left untouched, so pass [`ConfigFileGuard::path`] explicitly.
pub struct ConfigFileGuard {
  temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// Create a config file with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(TEST_CONFIG_FILE_NAME);
    fs::write(&path, content).expect("Failed to write test config file");

    Self { temp_dir, path }
  }

  /// A config using a Personal Access Token against `server`
  pub fn with_pat(server: &str, pat: &str) -> Self {
    Self::new(&format!("[jira]\nserver = {server}\npat = {pat}\n"))
  }

  /// A config using email + API token against `server`
  pub fn with_basic(server: &str, email: &str, api_token: &str) -> Self {
    Self::new(&format!(
      "[jira]\nserver = {server}\nemail = {email}\napi_token = {api_token}\n"
    ))
  }

  /// Get the path to the config file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read the current file content
  pub fn read(&self) -> String {
    fs::read_to_string(&self.path).expect("Failed to read test config file")
  }
}
