//! Decides whether a new line opens a block or continues the current level.
//!
//! This is a one-char lookback: only the last non-blank char before the line
//! matters. A `{` inside a string or after a comment still counts.

use autoindent_core::buffer::{
  Result,
  TextBuffer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentMode {
  /// Nothing but whitespace precedes the line.
  Unknown,
  /// The previous non-blank char is `{`.
  NewBlock,
  SameLevel,
}

pub fn classify<B>(buffer: &B, line_start: usize) -> Result<IndentMode>
where
  B: TextBuffer + ?Sized,
{
  let last_non_white = buffer.first_non_whitespace_before(line_start)?;
  mode_at(buffer, last_non_white)
}

/// Mode for an already located last non-blank char.
pub fn mode_at<B>(buffer: &B, last_non_white: Option<usize>) -> Result<IndentMode>
where
  B: TextBuffer + ?Sized,
{
  let Some(pos) = last_non_white else {
    return Ok(IndentMode::Unknown);
  };

  Ok(match buffer.char_at(pos)? {
    '{' => IndentMode::NewBlock,
    _ => IndentMode::SameLevel,
  })
}
