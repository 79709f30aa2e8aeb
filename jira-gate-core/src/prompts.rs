//! # Prompts Module
//!
//! Provides a custom dialoguer theme for jira-gate's interactive setup.

use console::Style;
use dialoguer::theme::ColorfulTheme;

/// Returns the dialoguer theme used by `config init --interactive`.
///
/// Features:
/// - Cyan bold prompt text
/// - Green `❯` prefix on active item
/// - Green highlight on active item text
pub fn gate_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    active_item_prefix: Style::new().green().apply_to("❯ ".to_string()),
    active_item_style: Style::new().green(),
    ..ColorfulTheme::default()
  }
}
