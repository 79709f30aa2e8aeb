//! # Config Command
//!
//! Creates the credentials file (from a template or interactively) and shows
//! the resolved settings with secrets masked.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dialoguer::{Input, Password, Select};
use jira_gate_core::output::{format_command, format_path, print_info, print_success, print_warning};
use jira_gate_core::prompts::gate_theme;
use jira_gate_core::{ConfigError, ConfigFile, Credentials, JiraAuth, mask_secret};

/// Command for config file management
#[derive(Args)]
pub struct ConfigArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ConfigSubcommands,
}

/// Subcommands for the config command
#[derive(Subcommand)]
pub enum ConfigSubcommands {
  /// Initialize configuration file
  #[command(long_about = "Write a config file with placeholders for both authentication options.\n\n\
                      With --interactive, prompts for the server URL, the authentication\n\
                      method, and the matching secrets instead. An existing file is only\n\
                      replaced when --force is given.")]
  Init {
    /// Custom config file path
    #[arg(long)]
    path: Option<PathBuf>,

    /// Overwrite existing config file
    #[arg(long)]
    force: bool,

    /// Interactive configuration setup
    #[arg(long, short = 'i')]
    interactive: bool,
  },

  /// Show current configuration (without sensitive data)
  Show {
    /// Custom config file path
    #[arg(long)]
    path: Option<PathBuf>,
  },
}

pub(crate) fn handle_config_command(config: ConfigArgs) -> Result<()> {
  match config.subcommand {
    ConfigSubcommands::Init {
      path,
      force,
      interactive,
    } => {
      let file = ConfigFile::new(path.as_deref())?;
      if interactive {
        handle_interactive_init(&file, force)
      } else {
        handle_template_init(&file, force)
      }
    }
    ConfigSubcommands::Show { path } => handle_show_command(&ConfigFile::new(path.as_deref())?),
  }
}

fn handle_template_init(file: &ConfigFile, force: bool) -> Result<()> {
  file.create_template(force)?;
  print_success(&format!(
    "Config template created at: {}",
    format_path(&file.path().display().to_string())
  ));
  print_info("Please edit the file and add your JIRA credentials.");
  Ok(())
}

fn handle_interactive_init(file: &ConfigFile, force: bool) -> Result<()> {
  // Fail before prompting rather than after
  if file.exists() && !force {
    return Err(
      ConfigError::AlreadyExists {
        path: file.path().to_path_buf(),
      }
      .into(),
    );
  }

  let theme = gate_theme();
  print_info("Welcome to jira-gate interactive setup!");
  println!();

  let server: String = Input::with_theme(&theme)
    .with_prompt("JIRA server URL (e.g., https://your-domain.atlassian.net)")
    .interact_text()
    .context("Failed to read server URL")?;

  let choice = Select::with_theme(&theme)
    .with_prompt("Choose authentication method")
    .items([
      "Personal Access Token (PAT) - for JIRA Data Center/Server",
      "Email + API Token - for JIRA Cloud",
    ])
    .default(1)
    .interact()
    .context("Failed to read authentication method")?;

  let auth = if choice == 0 {
    println!();
    println!("To generate a Personal Access Token:");
    println!("  1. Log in to your JIRA instance");
    println!("  2. Go to JIRA Settings > Personal Access Tokens");
    println!("  3. Click 'Create token'");
    println!();

    let token = Password::with_theme(&theme)
      .with_prompt("Enter your Personal Access Token")
      .interact()
      .context("Failed to read Personal Access Token")?;
    JiraAuth::Pat { token }
  } else {
    println!();
    println!("To generate an API Token:");
    println!("  1. Go to https://id.atlassian.com/manage-profile/security/api-tokens");
    println!("  2. Click 'Create API token'");
    println!();

    let email: String = Input::with_theme(&theme)
      .with_prompt("Enter your JIRA account email")
      .interact_text()
      .context("Failed to read email")?;
    let api_token = Password::with_theme(&theme)
      .with_prompt("Enter your API token")
      .interact()
      .context("Failed to read API token")?;
    JiraAuth::Basic { email, api_token }
  };

  file.create_interactive(&server, &auth, force)?;

  println!();
  print_success(&format!(
    "Setup complete! Credentials saved to {}",
    format_path(&file.path().display().to_string())
  ));
  print_info(&format!(
    "Test your connection with: {}",
    format_command("jira-gate test")
  ));
  Ok(())
}

fn handle_show_command(file: &ConfigFile) -> Result<()> {
  let credentials = file.load()?;
  println!("{}", format_config_summary(&credentials));

  if !file.has_secure_permissions()? {
    print_warning("Your config file is readable by other users.");
    println!(
      "For security, change permissions to 600: {}",
      format_command(&format!("chmod 600 {}", file.path().display()))
    );
  }
  Ok(())
}

/// Settings with every secret masked
pub fn format_config_summary(credentials: &Credentials) -> String {
  let mut lines = vec![
    format!("Server: {}", credentials.server),
    format!("Auth Method: {}", credentials.auth_method()),
  ];

  match &credentials.auth {
    JiraAuth::Pat { token } => lines.push(format!("PAT: {}", mask_secret(token))),
    JiraAuth::Basic { email, api_token } => {
      lines.push(format!("Email: {email}"));
      lines.push(format!("API Token: {}", mask_secret(api_token)));
    }
  }

  lines.join("\n")
}
