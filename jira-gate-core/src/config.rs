//! # Configuration Management
//!
//! Locates, validates, and writes the jira-gate credentials file. The file
//! lives at `~/.jira-gate.config` unless a path is given explicitly, and holds
//! a single `[jira]` section with a server URL plus either a Personal Access
//! Token or an email/API token pair.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;
use tracing::{debug, info};

use crate::creds::{Credentials, JiraAuth};
use crate::ini::IniDocument;

/// File name of the default config file inside the home directory
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".jira-gate.config";

/// Name of the section holding Jira settings
pub const JIRA_SECTION: &str = "jira";

const TEMPLATE: &str = "[jira]
# Your JIRA server URL (e.g., https://your-domain.atlassian.net)
server =

# Authentication Method - Choose ONE of the following:

# Option 1: Personal Access Token (PAT) - Recommended for JIRA Data Center/Server
# Generate at: JIRA Settings > Personal Access Tokens
# Uncomment and fill in if using PAT:
# pat =

# Option 2: Email + API Token - Common for JIRA Cloud
# Generate API token at: https://id.atlassian.com/manage-profile/security/api-tokens
# Uncomment and fill in if using Email + API Token:
# email =
# api_token =
";

/// Errors raised while resolving or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Config file not found at {}. Please create one using the template.", path.display())]
  NotFound { path: PathBuf },

  #[error("{0}")]
  InvalidConfig(String),

  #[error("Config file already exists at {}. Use --force to overwrite.", path.display())]
  AlreadyExists { path: PathBuf },

  #[error("Could not determine the home directory for the default config file")]
  NoHomeDirectory,

  #[error("Failed to access config file {}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

impl ConfigError {
  pub(crate) fn invalid(message: impl Into<String>) -> Self {
    ConfigError::InvalidConfig(message.into())
  }

  fn io(path: &Path, source: io::Error) -> Self {
    ConfigError::Io {
      path: path.to_path_buf(),
      source,
    }
  }
}

/// Returns `~/.jira-gate.config` for the current user.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
  let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
  Ok(base_dirs.home_dir().join(DEFAULT_CONFIG_FILE_NAME))
}

/// Resolve credentials from an explicit path or the default location.
pub fn resolve_credentials(path: Option<&Path>) -> Result<Credentials, ConfigError> {
  ConfigFile::new(path)?.load()
}

/// Handle to the credentials file at a resolved path
#[derive(Debug, Clone)]
pub struct ConfigFile {
  path: PathBuf,
}

impl ConfigFile {
  /// Create a handle for `path`, or for the default location when `None`.
  pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
    let path = match path {
      Some(path) => path.to_path_buf(),
      None => default_config_path()?,
    };
    Ok(Self { path })
  }

  /// Path this handle reads from and writes to
  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn exists(&self) -> bool {
    self.path.exists()
  }

  /// Load and validate the credentials.
  ///
  /// A non-blank `pat` wins over `email`/`api_token` when both are present.
  pub fn load(&self) -> Result<Credentials, ConfigError> {
    if !self.exists() {
      return Err(ConfigError::NotFound {
        path: self.path.clone(),
      });
    }

    debug!("Loading Jira credentials from {}", self.path.display());
    let content = fs::read_to_string(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
    let doc = IniDocument::parse(&content)?;

    if doc.section(JIRA_SECTION).is_none() {
      return Err(ConfigError::invalid("Config file missing [jira] section"));
    }

    let server = doc
      .value(JIRA_SECTION, "server")
      .ok_or_else(|| ConfigError::invalid("Missing required field: server"))?;

    let pat = doc.value(JIRA_SECTION, "pat");
    let basic = doc
      .value(JIRA_SECTION, "email")
      .zip(doc.value(JIRA_SECTION, "api_token"));

    let auth = match (pat, basic) {
      (Some(token), basic) => {
        if basic.is_some() {
          debug!("Both 'pat' and 'email'/'api_token' are set; using the Personal Access Token");
        }
        JiraAuth::Pat {
          token: token.to_string(),
        }
      }
      (None, Some((email, api_token))) => JiraAuth::Basic {
        email: email.to_string(),
        api_token: api_token.to_string(),
      },
      (None, None) => {
        return Err(ConfigError::invalid(
          "Authentication credentials missing. Provide either 'pat' (Personal Access Token) or both 'email' and 'api_token'",
        ));
      }
    };

    debug!("Resolved {} credentials for {}", auth.method(), server);
    Ok(Credentials {
      server: server.to_string(),
      auth,
    })
  }

  /// Write the commented template, refusing to clobber an existing file unless
  /// `force` is set.
  pub fn create_template(&self, force: bool) -> Result<(), ConfigError> {
    self.ensure_writable(force)?;
    self.write(TEMPLATE)?;
    info!("Wrote config template to {}", self.path.display());
    Ok(())
  }

  /// Persist a server URL and credentials collected interactively.
  pub fn create_interactive(&self, server: &str, auth: &JiraAuth, force: bool) -> Result<(), ConfigError> {
    self.ensure_writable(force)?;

    let server = server.trim();
    if server.is_empty() {
      return Err(ConfigError::invalid("Server URL cannot be empty"));
    }

    let mut content = format!("[{JIRA_SECTION}]\nserver = {server}\n\n");
    match auth {
      JiraAuth::Pat { token } => {
        require_non_blank("Personal Access Token", token)?;
        content.push_str(&format!("pat = {}\n", token.trim()));
      }
      JiraAuth::Basic { email, api_token } => {
        require_non_blank("Email", email)?;
        require_non_blank("API token", api_token)?;
        content.push_str(&format!("email = {}\n", email.trim()));
        content.push_str(&format!("api_token = {}\n", api_token.trim()));
      }
    }

    self.write(&content)?;
    info!("Wrote {} credentials to {}", auth.method(), self.path.display());
    Ok(())
  }

  fn ensure_writable(&self, force: bool) -> Result<(), ConfigError> {
    if self.exists() && !force {
      return Err(ConfigError::AlreadyExists {
        path: self.path.clone(),
      });
    }
    Ok(())
  }

  fn write(&self, content: &str) -> Result<(), ConfigError> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let mut file = File::create(&self.path).map_err(|e| ConfigError::io(&self.path, e))?;
    file
      .write_all(content.as_bytes())
      .and_then(|()| file.sync_all())
      .map_err(|e| ConfigError::io(&self.path, e))?;
    drop(file);

    set_secure_permissions(&self.path)
  }

  /// Whether only the owner can read the file. Always true off Unix.
  pub fn has_secure_permissions(&self) -> Result<bool, ConfigError> {
    has_secure_permissions(&self.path)
  }
}

fn require_non_blank(field: &str, value: &str) -> Result<(), ConfigError> {
  if value.trim().is_empty() {
    return Err(ConfigError::invalid(format!("{field} cannot be empty")));
  }
  Ok(())
}

#[cfg(unix)]
fn set_secure_permissions(path: &Path) -> Result<(), ConfigError> {
  use std::os::unix::fs::PermissionsExt;

  let mut perms = fs::metadata(path).map_err(|e| ConfigError::io(path, e))?.permissions();
  perms.set_mode(0o600); // Owner read/write only
  fs::set_permissions(path, perms).map_err(|e| ConfigError::io(path, e))
}

#[cfg(not(unix))]
fn set_secure_permissions(_path: &Path) -> Result<(), ConfigError> {
  Ok(())
}

#[cfg(unix)]
fn has_secure_permissions(path: &Path) -> Result<bool, ConfigError> {
  use std::os::unix::fs::PermissionsExt;

  let mode = fs::metadata(path).map_err(|e| ConfigError::io(path, e))?.permissions().mode();
  Ok(mode & 0o077 == 0)
}

#[cfg(not(unix))]
fn has_secure_permissions(_path: &Path) -> Result<bool, ConfigError> {
  Ok(true)
}
