//! Decoration styling and context key for transition cursors.
//!
//! Defaults draw parked selections as hollow outlines with a dot in the
//! gutter, and keep the anchor mark hidden. Every field can be overridden
//! from TOML:
//!
//! ```
//! use transit_lib::config::{
//!   DrawFlags,
//!   TransitionConfig,
//! };
//!
//! let config = TransitionConfig::from_toml(
//!   r#"
//!   [parked]
//!   icon = "circle"
//!   flags = "DRAW_NO_OUTLINE | PERSISTENT"
//!   "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.parked.icon, "circle");
//! assert_eq!(config.parked.flags, DrawFlags::DRAW_NO_OUTLINE | DrawFlags::PERSISTENT);
//! assert_eq!(config.context_key, "in_cursor_transition");
//! ```

use bitflags::bitflags;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

bitflags! {
  /// How a decoration is drawn by the host.
  #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
  #[serde(transparent)]
  pub struct DrawFlags: u32 {
    const DRAW_EMPTY              = 1;
    const HIDE_ON_MINIMAP         = 1 << 1;
    const DRAW_EMPTY_AS_OVERWRITE = 1 << 2;
    /// Survives closing and reopening the view in the same session.
    const PERSISTENT              = 1 << 4;
    const DRAW_NO_FILL            = 1 << 5;
    const HIDDEN                  = 1 << 7;
    const DRAW_NO_OUTLINE         = 1 << 8;
    const DRAW_SOLID_UNDERLINE    = 1 << 9;
    const DRAW_STIPPLED_UNDERLINE = 1 << 10;
    const DRAW_SQUIGGLY_UNDERLINE = 1 << 11;
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationStyle {
  pub scope: String,
  pub icon:  String,
  pub flags: DrawFlags,
}

impl DecorationStyle {
  pub fn new(scope: impl Into<String>, icon: impl Into<String>, flags: DrawFlags) -> Self {
    Self {
      scope: scope.into(),
      icon: icon.into(),
      flags,
    }
  }

  pub fn parked() -> Self {
    Self::new(
      "transition_cursor",
      "dot",
      DrawFlags::DRAW_EMPTY | DrawFlags::DRAW_NO_FILL | DrawFlags::PERSISTENT,
    )
  }

  pub fn mark() -> Self {
    Self::new("mark", "dot", DrawFlags::HIDDEN | DrawFlags::PERSISTENT)
  }
}

/// Fields set in one `[parked]` or `[mark]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleToml {
  scope: Option<String>,
  icon:  Option<String>,
  flags: Option<DrawFlags>,
}

impl StyleToml {
  /// Fill the unset fields from `base`.
  fn layer(self, base: DecorationStyle) -> DecorationStyle {
    DecorationStyle {
      scope: self.scope.unwrap_or(base.scope),
      icon:  self.icon.unwrap_or(base.icon),
      flags: self.flags.unwrap_or(base.flags),
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
  context_key: Option<String>,
  parked:      Option<StyleToml>,
  mark:        Option<StyleToml>,
}

impl From<ConfigToml> for TransitionConfig {
  fn from(toml: ConfigToml) -> Self {
    let defaults = TransitionConfig::default();
    Self {
      context_key: toml.context_key.unwrap_or(defaults.context_key),
      parked:      toml.parked.unwrap_or_default().layer(defaults.parked),
      mark:        toml.mark.unwrap_or_default().layer(defaults.mark),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ConfigToml")]
pub struct TransitionConfig {
  /// Context key answered by [`crate::transition::Transitions::query_context`].
  pub context_key: String,
  pub parked:      DecorationStyle,
  pub mark:        DecorationStyle,
}

impl Default for TransitionConfig {
  fn default() -> Self {
    Self {
      context_key: "in_cursor_transition".to_string(),
      parked:      DecorationStyle::parked(),
      mark:        DecorationStyle::mark(),
    }
  }
}

impl TransitionConfig {
  /// Parse overrides. Anything left out keeps its built-in value, field by
  /// field.
  pub fn from_toml(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }
}
