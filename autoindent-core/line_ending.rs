//! Line breaks as ropey sees them.
//!
//! The indenter only ever writes one line break itself (before an
//! auto-inserted `}`), and it uses whatever the buffer already uses.

use ropey::{
  Rope,
  RopeSlice,
};

/// Line breaks recognised by ropey with its default `unicode_lines` feature.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  #[default]
  LF,

  /// U+000B -- VerticalTab
  VT,

  /// U+000C -- FormFeed
  FF,

  /// U+000D -- CarriageReturn
  CR,

  /// U+0085 -- NextLine
  Nel,

  /// U+2028 -- Line Separator
  LS,

  /// U+2029 -- ParagraphSeparator
  PS,
}

impl LineEnding {
  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
      Self::VT => "\u{000B}",
      Self::FF => "\u{000C}",
      Self::CR => "\u{000D}",
      Self::Nel => "\u{0085}",
      Self::LS => "\u{2028}",
      Self::PS => "\u{2029}",
    }
  }

  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000B}' => Some(LineEnding::VT),
      '\u{000C}' => Some(LineEnding::FF),
      '\u{000D}' => Some(LineEnding::CR),
      '\u{0085}' => Some(LineEnding::Nel),
      '\u{2028}' => Some(LineEnding::LS),
      '\u{2029}' => Some(LineEnding::PS),
      _ => None,
    }
  }

  // Not `FromStr`: an unknown string is `None`, not an error.
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn from_str(g: &str) -> Option<LineEnding> {
    match g {
      "\u{000D}\u{000A}" => Some(LineEnding::Crlf),
      "\u{000A}" => Some(LineEnding::LF),
      "\u{000B}" => Some(LineEnding::VT),
      "\u{000C}" => Some(LineEnding::FF),
      "\u{000D}" => Some(LineEnding::CR),
      "\u{0085}" => Some(LineEnding::Nel),
      "\u{2028}" => Some(LineEnding::LS),
      "\u{2029}" => Some(LineEnding::PS),
      _ => None,
    }
  }
}

/// Attempts to detect what line ending the passed document uses.
pub fn auto_detect_line_ending(doc: &Rope) -> Option<LineEnding> {
  // Only LF, CRLF and CR decide. The Unicode breaks (VT, FF, NEL, LS, PS)
  // show up inside string literals and comments without being the file's
  // newline.
  for line in doc.lines().take(100) {
    if let Some(ending @ (LineEnding::Crlf | LineEnding::LF | LineEnding::CR)) =
      get_line_ending(&line)
    {
      return Some(ending);
    }
  }

  None
}

/// Returns the passed line's line ending, if any.
pub fn get_line_ending(line: &RopeSlice) -> Option<LineEnding> {
  let len = line.len_chars();

  // A non-contiguous tail can't be a line ending; treat it as empty.
  let g2 = line.slice(len.saturating_sub(2)..).as_str().unwrap_or("");
  let g1 = line.slice(len.saturating_sub(1)..).as_str().unwrap_or("");

  LineEnding::from_str(g2).or_else(|| LineEnding::from_str(g1))
}
