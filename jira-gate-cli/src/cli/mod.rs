//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for jira-gate: config file
//! management, a connection test, issue operations, and project listing.

mod config;
mod connection;
mod issue;
mod project;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use jira_gate_core::output::ColorMode;

/// Top-level CLI command for jira-gate
#[derive(Parser)]
#[command(name = "jira-gate")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A CLI tool to interact with the JIRA API")]
#[command(
  long_about = "jira-gate talks to a JIRA server using credentials from a local config file.\n\n\
        Authenticate with a Personal Access Token (JIRA Data Center/Server) or an\n\
        email + API token pair (JIRA Cloud), then fetch, search, create, and update\n\
        issues or list projects."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    global = true,
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    global = true,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for jira-gate
#[derive(Subcommand)]
pub enum Commands {
  /// Manage configuration
  #[command(long_about = "Create or inspect the jira-gate config file.\n\n\
            The config file holds your JIRA server URL and credentials. It lives at\n\
            ~/.jira-gate.config unless --path points elsewhere.")]
  #[command(arg_required_else_help = true)]
  Config(config::ConfigArgs),

  /// Test JIRA connection
  #[command(long_about = "Test the connection to JIRA.\n\n\
            Fetches the identity of the authenticated user to confirm the server URL\n\
            and credentials are valid.")]
  Test(connection::TestArgs),

  /// Manage JIRA issues
  #[command(long_about = "Fetch, search, create, and update JIRA issues.")]
  #[command(arg_required_else_help = true)]
  Issue(issue::IssueArgs),

  /// Manage JIRA projects
  #[command(long_about = "List the JIRA projects visible to you.")]
  #[command(arg_required_else_help = true)]
  Project(project::ProjectArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  match cli.command {
    Commands::Config(config) => config::handle_config_command(config),
    Commands::Test(test) => connection::handle_test_command(&test),
    Commands::Issue(issue) => issue::handle_issue_command(issue),
    Commands::Project(project) => project::handle_project_command(&project),
  }
}
