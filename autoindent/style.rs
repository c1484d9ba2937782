//! Code style: how wide an indent level is and how it is written out.
//!
//! A [`StyleConfig`] is resolved once per indent request through a
//! [`StyleResolver`]. The resolver is passed in explicitly by the host; there
//! is no process-wide style registry.
//!
//! Styles can be loaded from TOML:
//!
//! ```toml
//! [default]
//! tab-size = 4
//! indent-size = 4
//! expand-tabs = true
//!
//! [languages.vala]
//! expand-tabs = false
//! ```
//!
//! Keys missing from a `[languages.*]` table fall back to `[default]`.

use std::{
  collections::HashMap,
  num::NonZeroUsize,
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::Tendril;

const DEFAULT_WIDTH: NonZeroUsize = NonZeroUsize::MIN.saturating_add(3);

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleError {
  #[error("{field} must be greater than zero")]
  ZeroWidth { field: &'static str },
  #[error(transparent)]
  Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StyleConfig {
  /// Columns a tab character advances.
  pub tab_size:    NonZeroUsize,
  /// Columns added for each nesting level.
  pub indent_size: NonZeroUsize,
  /// Write indentation with spaces only.
  pub expand_tabs: bool,
}

impl Default for StyleConfig {
  fn default() -> Self {
    Self {
      tab_size:    DEFAULT_WIDTH,
      indent_size: DEFAULT_WIDTH,
      expand_tabs: true,
    }
  }
}

impl StyleConfig {
  pub fn new(tab_size: usize, indent_size: usize, expand_tabs: bool) -> Result<Self> {
    Ok(Self {
      tab_size: NonZeroUsize::new(tab_size).ok_or(StyleError::ZeroWidth { field: "tab-size" })?,
      indent_size: NonZeroUsize::new(indent_size).ok_or(StyleError::ZeroWidth {
        field: "indent-size",
      })?,
      expand_tabs,
    })
  }

  pub fn from_toml(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn tab_size(&self) -> usize {
    self.tab_size.get()
  }

  pub fn indent_size(&self) -> usize {
    self.indent_size.get()
  }
}

/// Renders `width` columns of indentation.
///
/// With `expand_tabs` this is `width` spaces; otherwise as many tabs as fit,
/// padded with spaces for the remainder.
pub fn width_to_indent_text(width: usize, style: &StyleConfig) -> Tendril {
  let mut text = Tendril::new();
  if style.expand_tabs {
    text.extend(std::iter::repeat_n(' ', width));
  } else {
    let tab_size = style.tab_size();
    text.extend(std::iter::repeat_n('\t', width / tab_size));
    text.extend(std::iter::repeat_n(' ', width % tab_size));
  }
  text
}

/// Supplies the style for a buffer. Read once per request.
pub trait StyleResolver<B: ?Sized> {
  fn resolve(&self, buffer: &B) -> StyleConfig;
}

impl<B: ?Sized> StyleResolver<B> for StyleConfig {
  fn resolve(&self, _buffer: &B) -> StyleConfig {
    *self
  }
}

/// Buffers that know which language they hold.
pub trait LanguageId {
  fn language(&self) -> Option<&str>;
}

/// Per-language overrides layered on top of [`CodeStyles::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct StyleOverride {
  pub tab_size:    Option<NonZeroUsize>,
  pub indent_size: Option<NonZeroUsize>,
  pub expand_tabs: Option<bool>,
}

impl StyleOverride {
  pub fn apply(&self, base: StyleConfig) -> StyleConfig {
    StyleConfig {
      tab_size:    self.tab_size.unwrap_or(base.tab_size),
      indent_size: self.indent_size.unwrap_or(base.indent_size),
      expand_tabs: self.expand_tabs.unwrap_or(base.expand_tabs),
    }
  }
}

/// Code styles keyed by language name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CodeStyles {
  pub default:   StyleConfig,
  pub languages: HashMap<String, StyleOverride>,
}

impl CodeStyles {
  pub fn from_toml(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn style_for(&self, language: Option<&str>) -> StyleConfig {
    match language.and_then(|name| self.languages.get(name)) {
      Some(over) => over.apply(self.default),
      None => self.default,
    }
  }
}

impl<B: LanguageId + ?Sized> StyleResolver<B> for CodeStyles {
  fn resolve(&self, buffer: &B) -> StyleConfig {
    let language = buffer.language();
    let style = self.style_for(language);
    tracing::trace!(?language, ?style, "resolved code style");
    style
  }
}
