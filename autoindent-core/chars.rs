//! Character classes used by the indentation scanners.

use crate::line_ending::LineEnding;

#[derive(Debug, Eq, PartialEq)]
pub enum CharCategory {
  Whitespace,
  Eol,
  OpenBrace,
  CloseBrace,
  Quote,
  Other,
}

pub fn categorize_char(ch: char) -> CharCategory {
  match ch {
    c if char_is_line_ending(c) => CharCategory::Eol,
    c if char_is_whitespace(c) => CharCategory::Whitespace,
    '{' => CharCategory::OpenBrace,
    '}' => CharCategory::CloseBrace,
    '"' | '\'' => CharCategory::Quote,
    _ => CharCategory::Other,
  }
}

#[inline]
pub fn char_is_line_ending(ch: char) -> bool {
  LineEnding::from_char(ch).is_some()
}

#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  // Only horizontal whitespace; line endings are classified separately so
  // callers can tell "blank" apart from "breaks the line".
  match ch {
      '\u{0009}' | // Character Tabulation
      '\u{0020}' | // Space
      '\u{00A0}' | // No-break Space
      '\u{180E}' | // Mongolian Vowel Separator
      '\u{202F}' | // Narrow No-break Space
      '\u{205F}' | // Medium Mathematical Space
      '\u{3000}' | // Ideographic Space
      '\u{FEFF}'   // Zero Width No-break Space
      => true,

      // En Quad, Em Quad, En Space, Em Space, Three-per-em Space,
      // Four-per-em Space, Six-per-em Space, Figure Space,
      // Punctuation Space, Thin Space, Hair Space, Zero Width Space.
      ch if ('\u{2000}' ..= '\u{200B}').contains(&ch) => true,

      _ => false,
    }
}

/// Whitespace or a line break: everything the backward/forward
/// "first non-white" searches skip over.
#[inline]
pub fn char_is_blank(ch: char) -> bool {
  char_is_whitespace(ch) || char_is_line_ending(ch)
}

/// Visual columns taken by a leading-whitespace character.
#[inline]
pub fn indent_char_width(ch: char, tab_size: usize) -> usize {
  if ch == '\t' { tab_size } else { 1 }
}
