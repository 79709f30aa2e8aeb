//! Reader for the INI-style credentials file.
//!
//! The format is deliberately small: `[section]` headers followed by
//! `key = value` (or `key: value`) lines. Full-line comments start with `#` or
//! `;`. Keys are case-insensitive and stored lowercased, section names are kept
//! as written.

use std::collections::BTreeMap;

use crate::config::ConfigError;

/// A parsed section: lowercased keys mapped to trimmed values.
pub type Section = BTreeMap<String, String>;

/// A parsed INI document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IniDocument {
  sections: BTreeMap<String, Section>,
}

impl IniDocument {
  /// Parse the document text.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::InvalidConfig`] when a key appears before any
  /// section header, when a line has no `=`/`:` delimiter, or when a section
  /// or key is declared twice.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let mut sections: BTreeMap<String, Section> = BTreeMap::new();
    let mut current: Option<String> = None;

    for (index, raw_line) in content.lines().enumerate() {
      let line_no = index + 1;
      let line = raw_line.trim();

      if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        continue;
      }

      if let Some(header) = line.strip_prefix('[') {
        let Some(name) = header.strip_suffix(']') else {
          return Err(ConfigError::invalid(format!(
            "Malformed section header on line {line_no}: '{line}'"
          )));
        };
        let name = name.trim().to_string();
        if sections.contains_key(&name) {
          return Err(ConfigError::invalid(format!(
            "Section [{name}] declared more than once (line {line_no})"
          )));
        }
        sections.insert(name.clone(), Section::new());
        current = Some(name);
        continue;
      }

      let Some(section_name) = current.as_ref() else {
        return Err(ConfigError::invalid(format!(
          "Line {line_no} appears before any [section] header"
        )));
      };

      let Some((key, value)) = split_key_value(line) else {
        return Err(ConfigError::invalid(format!(
          "Line {line_no} is not a 'key = value' pair: '{line}'"
        )));
      };

      let section = sections.entry(section_name.clone()).or_default();
      if section.contains_key(&key) {
        return Err(ConfigError::invalid(format!(
          "Key '{key}' declared more than once in [{section_name}] (line {line_no})"
        )));
      }
      section.insert(key, value);
    }

    Ok(Self { sections })
  }

  /// Get a section by name.
  pub fn section(&self, name: &str) -> Option<&Section> {
    self.sections.get(name)
  }

  /// Get a value from a section, treating blank values as absent.
  pub fn value(&self, section: &str, key: &str) -> Option<&str> {
    self
      .section(section)?
      .get(&key.to_ascii_lowercase())
      .map(String::as_str)
      .filter(|value| !value.trim().is_empty())
  }
}

/// Split on the first `=` or `:`, whichever comes first.
fn split_key_value(line: &str) -> Option<(String, String)> {
  let index = line.find(['=', ':'])?;
  let key = line[..index].trim();
  if key.is_empty() {
    return None;
  }
  let value = line[index + 1..].trim();
  Some((key.to_ascii_lowercase(), value.to_string()))
}
