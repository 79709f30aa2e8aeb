//! # Output Formatting
//!
//! Colored, emoji-prefixed status messages shared by every jira-gate command.

pub use owo_colors::Stream;
use owo_colors::OwoColorize;
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode as the global `owo-colors` override
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave terminal detection to owo-colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!(
    "{} {}",
    check.if_supports_color(Stream::Stdout, |text| text.green().bold().to_string()),
    message
  );
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!(
    "{} {}",
    cross.if_supports_color(Stream::Stderr, |text| text.red().bold().to_string()),
    message
  );
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!(
    "{} {}",
    warning.if_supports_color(Stream::Stdout, |text| text.yellow().bold().to_string()),
    message
  );
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!(
    "{} {}",
    info.if_supports_color(Stream::Stdout, |text| text.blue().bold().to_string()),
    message
  );
}

/// Format a filesystem path
pub fn format_path(path: &str) -> String {
  path
    .if_supports_color(Stream::Stdout, |text| text.bright_green().to_string())
    .to_string()
}

/// Format a command or command example
pub fn format_command(cmd: &str) -> String {
  format_command_for(cmd, Stream::Stdout)
}

/// Format a command that will be written to `stream`
pub fn format_command_for(cmd: &str, stream: Stream) -> String {
  cmd
    .if_supports_color(stream, |text| text.purple().to_string())
    .to_string()
}
