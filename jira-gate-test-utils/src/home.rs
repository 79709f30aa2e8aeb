//! HOME directory management for testing
//!
//! Isolates the HOME directory so tests touching the default config location
//! never read or write the user's real `~/.jira-gate.config`.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

/// Overrides HOME with a temporary directory for the lifetime of the guard
pub struct HomeEnvTestGuard {
  /// The temporary directory that will be used as HOME
  pub temp_dir: TempDir,
  /// The original HOME value, if any
  original_home: Option<String>,
}

impl Default for HomeEnvTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl HomeEnvTestGuard {
  /// Create a new test environment with a temporary HOME directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let original_home = env::var("HOME").ok();

    unsafe {
      env::set_var("HOME", temp_dir.path());
    }

    Self {
      temp_dir,
      original_home,
    }
  }

  /// Get the path to a file in the temporary HOME directory
  pub fn home_path(&self, relative_path: &str) -> PathBuf {
    self.temp_dir.path().join(relative_path)
  }
}

impl Drop for HomeEnvTestGuard {
  fn drop(&mut self) {
    match &self.original_home {
      Some(home) => unsafe {
        env::set_var("HOME", home);
      },
      None => unsafe {
        env::remove_var("HOME");
      },
    }
  }
}
