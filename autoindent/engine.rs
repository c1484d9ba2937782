//! Newline indentation.
//!
//! [`compute_indent`] looks at the line a caret sits on and produces a single
//! [`InsertionCommand`]: the indentation for that line, and, when the line
//! opens a block nothing in the buffer closes yet, a trailing line holding the
//! matching `}`.
//!
//! # Algorithm
//!
//! 1. Find the start of the caret's line and the last non-blank char before
//!    it.
//! 2. Measure the leading whitespace of the line holding that char, in
//!    columns (a tab is `tab_size` columns).
//! 3. If that char is `{`, indent one level deeper and count braces behind and
//!    ahead of the line start. Exactly one more unmatched `{` behind than
//!    unmatched `}` ahead means the block is still open anywhere in the
//!    buffer, so a closer is appended at the outer level.
//! 4. Otherwise keep the same width.
//!
//! The command is computed without touching the buffer; see
//! [`InsertionCommand::apply`] and [`crate::task::IndentTask`] for applying
//! it.
//!
//! ```
//! use autoindent::{
//!   engine::compute_indent,
//!   style::StyleConfig,
//! };
//! use ropey::Rope;
//!
//! let doc = Rope::from("void foo() {\n");
//! let style = StyleConfig::new(4, 4, true).unwrap();
//! let cmd = compute_indent(&doc, doc.len_chars(), &style).unwrap();
//!
//! assert_eq!(cmd.text.as_str(), "    \n}");
//! assert_eq!(cmd.caret, 17);
//! ```

use autoindent_core::{
  buffer::{
    BufferError,
    TextBuffer,
  },
  chars::{
    char_is_whitespace,
    indent_char_width,
  },
};
use thiserror::Error;

use crate::{
  Tendril,
  classify::{
    IndentMode,
    mode_at,
  },
  scanner::{
    Direction,
    count_unmatched_braces,
  },
  style::{
    StyleConfig,
    width_to_indent_text,
  },
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndentError {
  #[error("caret offset {offset} is out of bounds for buffer length {len}")]
  InvalidOffset { offset: usize, len: usize },
  #[error(transparent)]
  Buffer(#[from] BufferError),
}

pub type Result<T> = std::result::Result<T, IndentError>;

/// A caret position in a buffer that just received a newline.
#[derive(Debug)]
pub struct EditRequest<'a, B: ?Sized> {
  pub buffer: &'a B,
  pub caret:  usize,
}

impl<'a, B> EditRequest<'a, B>
where
  B: TextBuffer + ?Sized,
{
  pub fn new(buffer: &'a B, caret: usize) -> Self {
    Self { buffer, caret }
  }

  pub fn compute(&self, style: &StyleConfig) -> Result<InsertionCommand> {
    compute_indent(self.buffer, self.caret, style)
  }
}

/// A single insertion plus where the caret goes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionCommand {
  /// Char offset the text is inserted at (the start of the caret's line).
  pub offset: usize,
  pub text:   Tendril,
  /// Caret after insertion: just past the indentation, before any
  /// auto-inserted closer.
  pub caret:  usize,
}

impl InsertionCommand {
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Length in chars of the indentation that precedes the caret.
  pub fn indent_len(&self) -> usize {
    self.caret.saturating_sub(self.offset)
  }

  /// Inserts the text and returns the new caret. Empty commands leave the
  /// buffer untouched.
  pub fn apply<B>(&self, buffer: &mut B) -> Result<usize>
  where
    B: TextBuffer + ?Sized,
  {
    if !self.is_empty() {
      buffer.insert(self.offset, &self.text)?;
    }
    Ok(self.caret)
  }
}

/// Computes the indentation for the line containing `caret`.
pub fn compute_indent<B>(buffer: &B, caret: usize, style: &StyleConfig) -> Result<InsertionCommand>
where
  B: TextBuffer + ?Sized,
{
  let len = buffer.len_chars();
  if caret > len {
    return Err(IndentError::InvalidOffset { offset: caret, len });
  }

  let line_start = buffer.line_start(caret)?;
  let last_non_white = buffer.first_non_whitespace_before(line_start)?;
  let current = match last_non_white {
    Some(pos) => current_indent_width(buffer, pos, style.tab_size())?,
    None => 0,
  };
  let mode = mode_at(buffer, last_non_white)?;

  tracing::trace!(caret, line_start, ?last_non_white, current, ?mode, "indent request");

  let command = match mode {
    IndentMode::NewBlock => new_block(buffer, line_start, current, style)?,
    IndentMode::SameLevel | IndentMode::Unknown => {
      let text = width_to_indent_text(current, style);
      let caret = line_start + text.chars().count();
      InsertionCommand {
        offset: line_start,
        text,
        caret,
      }
    },
  };

  tracing::debug!("indent command: {:?}", command);
  Ok(command)
}

fn new_block<B>(
  buffer: &B,
  line_start: usize,
  current: usize,
  style: &StyleConfig,
) -> Result<InsertionCommand>
where
  B: TextBuffer + ?Sized,
{
  let mut text = width_to_indent_text(current + style.indent_size(), style);
  let caret = line_start + text.chars().count();

  let open = count_unmatched_braces(buffer, line_start, Direction::Backward)?;
  let close = count_unmatched_braces(buffer, line_start, Direction::Forward)?;
  let auto_close = open == close + 1;
  tracing::trace!(open, close, auto_close, "brace balance");

  if auto_close {
    text.push_str(buffer.line_ending().as_str());
    text.push_str(&width_to_indent_text(current, style));
    text.push('}');
  }

  Ok(InsertionCommand {
    offset: line_start,
    text,
    caret,
  })
}

/// Visual width of the leading whitespace on the line holding
/// `last_non_white`.
pub fn current_indent_width<B>(buffer: &B, last_non_white: usize, tab_size: usize) -> Result<usize>
where
  B: TextBuffer + ?Sized,
{
  let line_start = buffer.line_start(last_non_white)?;
  let leading = buffer
    .chars_from(line_start, Direction::Forward)?
    .take(last_non_white.saturating_sub(line_start));

  let mut width = 0;
  for ch in leading {
    let ch = ch?;
    if !char_is_whitespace(ch) {
      break;
    }
    width += indent_char_width(ch, tab_size);
  }
  Ok(width)
}
