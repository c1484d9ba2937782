//! The text surface the indentation core needs from a host editor.
//!
//! Hosts implement [`TextBuffer`] over whatever storage they use; the core
//! never touches anything else. A `ropey::Rope` implementation is provided so
//! the core can be exercised against an in-memory buffer.
//!
//! All offsets are char indices. Whole-buffer reads go through
//! [`TextBuffer::chars_from`] so a host can stream chars instead of paying a
//! lookup per offset.

use ropey::Rope;
use thiserror::Error;

use crate::{
  chars::char_is_blank,
  line_ending::{
    LineEnding,
    auto_detect_line_ending,
  },
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BufferError {
  #[error("offset {offset} is out of bounds for buffer length {len}")]
  OutOfBounds { offset: usize, len: usize },
  #[error("buffer is closed")]
  Closed,
  #[error("buffer access failed: {0}")]
  Other(String),
}

pub type Result<T> = std::result::Result<T, BufferError>;

/// The direction a read moves through the buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
  /// Toward the end of the buffer (increasing offsets).
  Forward,
  /// Toward the start of the buffer (decreasing offsets).
  Backward,
}

pub trait TextBuffer {
  /// Length of the buffer in chars.
  fn len_chars(&self) -> usize;

  fn char_at(&self, offset: usize) -> Result<char>;

  /// Offset of the first char of the line containing `offset`.
  ///
  /// `offset == len_chars()` is valid and refers to the last line.
  fn line_start(&self, offset: usize) -> Result<usize>;

  fn insert(&mut self, offset: usize, text: &str) -> Result<()>;

  /// Line break used when the core has to open a new line itself.
  fn line_ending(&self) -> LineEnding {
    LineEnding::LF
  }

  /// Chars from `offset` to the buffer boundary in `direction`.
  ///
  /// Forward yields `[offset, len)` in order; backward yields `[0, offset)`
  /// nearest first. The default reads through [`TextBuffer::char_at`].
  fn chars_from(
    &self,
    offset: usize,
    direction: Direction,
  ) -> Result<impl Iterator<Item = Result<char>> + '_> {
    let len = self.len_chars();
    check_offset(len, offset)?;
    let count = match direction {
      Direction::Forward => len - offset,
      Direction::Backward => offset,
    };
    Ok((0..count).map(move |i| {
      let pos = match direction {
        Direction::Forward => offset + i,
        Direction::Backward => offset - 1 - i,
      };
      self.char_at(pos)
    }))
  }

  /// Offset of the last non-blank char strictly before `offset`, crossing
  /// line breaks.
  fn first_non_whitespace_before(&self, offset: usize) -> Result<Option<usize>> {
    for (i, ch) in self.chars_from(offset, Direction::Backward)?.enumerate() {
      if !char_is_blank(ch?) {
        return Ok(Some(offset - 1 - i));
      }
    }
    Ok(None)
  }

  /// Offset of the first non-blank char in `offset..limit`. `limit` is
  /// clamped to the buffer length.
  fn first_non_whitespace_after(&self, offset: usize, limit: usize) -> Result<Option<usize>> {
    let chars = self.chars_from(offset, Direction::Forward)?;
    for (i, ch) in chars.take(limit.saturating_sub(offset)).enumerate() {
      if !char_is_blank(ch?) {
        return Ok(Some(offset + i));
      }
    }
    Ok(None)
  }
}

#[inline]
pub fn check_offset(len: usize, offset: usize) -> Result<()> {
  if offset > len {
    return Err(BufferError::OutOfBounds { offset, len });
  }
  Ok(())
}

impl TextBuffer for Rope {
  fn len_chars(&self) -> usize {
    Rope::len_chars(self)
  }

  fn char_at(&self, offset: usize) -> Result<char> {
    self.get_char(offset).ok_or(BufferError::OutOfBounds {
      offset,
      len: Rope::len_chars(self),
    })
  }

  fn line_start(&self, offset: usize) -> Result<usize> {
    let len = Rope::len_chars(self);
    let line = self
      .try_char_to_line(offset)
      .map_err(|_| BufferError::OutOfBounds { offset, len })?;
    Ok(self.line_to_char(line))
  }

  fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
    let len = Rope::len_chars(self);
    self
      .try_insert(offset, text)
      .map_err(|_| BufferError::OutOfBounds { offset, len })
  }

  fn chars_from(
    &self,
    offset: usize,
    direction: Direction,
  ) -> Result<impl Iterator<Item = Result<char>> + '_> {
    let chars = self
      .get_chars_at(offset)
      .ok_or(BufferError::OutOfBounds {
        offset,
        len: Rope::len_chars(self),
      })?;
    let chars = match direction {
      Direction::Forward => chars,
      Direction::Backward => chars.reversed(),
    };
    Ok(chars.map(Ok))
  }

  fn line_ending(&self) -> LineEnding {
    auto_detect_line_ending(self).unwrap_or_default()
  }
}
