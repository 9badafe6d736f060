//! List-wide configuration shared by every row.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings every row reads while rendering.
///
/// Loaded from JSON; keys left out take their defaults.
///
/// ```
/// use prolist::config::ListConfig;
///
/// let config = ListConfig::from_json(r#"{ "prefix_cls": "acme-list" }"#).unwrap();
/// assert_eq!(config.row_class(), "acme-list-row");
/// assert_eq!(config.indent_size, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Class prefix for the list's own elements.
    pub prefix_cls: String,
    /// Class prefix of the underlying primitives (avatar, list item meta).
    pub ant_prefix: String,
    /// Indent handed to expanded-row callbacks when a row sets none.
    pub indent_size: u16,
    /// Avatar size used in card titles.
    pub card_avatar_size: u16,
    /// Body lines in the loading placeholder.
    pub skeleton_rows: u16,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            prefix_cls: "pro-list".into(),
            ant_prefix: "ant".into(),
            indent_size: 8,
            card_avatar_size: 22,
            skeleton_rows: 3,
        }
    }
}

impl ListConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Copy of this config with a different list prefix.
    pub fn with_prefix(&self, prefix_cls: impl Into<String>) -> Self {
        Self {
            prefix_cls: prefix_cls.into(),
            ..self.clone()
        }
    }

    /// Base class of a row: `{prefix_cls}-row`.
    pub fn row_class(&self) -> String {
        format!("{}-row", self.prefix_cls)
    }

    /// Class of a primitive part: `{ant_prefix}-{suffix}`.
    pub fn ant_class(&self, suffix: &str) -> String {
        format!("{}-{}", self.ant_prefix, suffix)
    }
}
