//! Literal-aware brace counting.
//!
//! The scanner walks a buffer one char at a time and counts braces that are
//! not inside a quoted literal. Literal tracking is a plain toggle per quote
//! kind: there is no escape handling and no comment awareness.
//!
//! Which brace counts as `+1` depends on the direction:
//!
//! - [`Direction::Backward`] reads `[0, from)` and counts `{` as `+1`, so a
//!   positive result is the number of unmatched openers behind `from`.
//! - [`Direction::Forward`] reads `[from, len)` and counts `}` as `+1`, so a
//!   positive result is the number of unmatched closers ahead of `from`.
//!
//! A negative count is a legitimate result (more of the opposite brace in the
//! scanned range).

pub use autoindent_core::buffer::Direction;
use autoindent_core::{
  buffer::{
    Result,
    TextBuffer,
  },
  chars::{
    CharCategory,
    categorize_char,
  },
};

/// Which quoted literal, if any, the scan is currently inside.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum LiteralMode {
  #[default]
  None,
  SingleQuote,
  DoubleQuote,
}

impl LiteralMode {
  /// State after reading `ch`. A quote only toggles its own literal kind and
  /// is inert inside the other one.
  #[inline]
  pub fn next(self, ch: char) -> Self {
    match (self, ch) {
      (Self::None, '"') => Self::DoubleQuote,
      (Self::DoubleQuote, '"') => Self::None,
      (Self::None, '\'') => Self::SingleQuote,
      (Self::SingleQuote, '\'') => Self::None,
      (mode, _) => mode,
    }
  }

  #[inline]
  pub fn in_literal(self) -> bool {
    self != Self::None
  }
}

/// Running brace count for one scan.
#[derive(Debug, Clone, Copy)]
pub struct BraceCounter {
  direction: Direction,
  mode:      LiteralMode,
  count:     isize,
}

impl BraceCounter {
  pub fn new(direction: Direction) -> Self {
    Self {
      direction,
      mode: LiteralMode::None,
      count: 0,
    }
  }

  pub fn push(&mut self, ch: char) {
    if !self.mode.in_literal() {
      self.count += brace_weight(ch, self.direction);
    }
    self.mode = self.mode.next(ch);
  }

  pub fn count(&self) -> isize {
    self.count
  }

  pub fn mode(&self) -> LiteralMode {
    self.mode
  }
}

#[inline]
fn brace_weight(ch: char, direction: Direction) -> isize {
  match (direction, categorize_char(ch)) {
    (Direction::Backward, CharCategory::OpenBrace)
    | (Direction::Forward, CharCategory::CloseBrace) => 1,
    (Direction::Backward, CharCategory::CloseBrace)
    | (Direction::Forward, CharCategory::OpenBrace) => -1,
    _ => 0,
  }
}

/// Counts braces over `chars`, which must already be in scan order (reversed
/// for [`Direction::Backward`]).
pub fn count_braces<I>(chars: I, direction: Direction) -> isize
where
  I: IntoIterator<Item = char>,
{
  let mut counter = BraceCounter::new(direction);
  for ch in chars {
    counter.push(ch);
  }
  counter.count()
}

/// Counts unmatched braces between `from` and the buffer boundary in
/// `direction`.
pub fn count_unmatched_braces<B>(buffer: &B, from: usize, direction: Direction) -> Result<isize>
where
  B: TextBuffer + ?Sized,
{
  let mut counter = BraceCounter::new(direction);
  for ch in buffer.chars_from(from, direction)? {
    counter.push(ch?);
  }
  Ok(counter.count())
}
