//! Newline auto-indentation for brace-delimited languages.
//!
//! The pieces, leaves first:
//!
//! - [`style`]: tab/indent widths and how a width is written out.
//! - [`scanner`]: brace counting that skips quoted literals.
//! - [`classify`]: new block or same level, from the last non-blank char.
//! - [`engine`]: builds the [`engine::InsertionCommand`] for a caret.
//! - [`task`]: applies a command to a host buffer.

use smartstring::{
  LazyCompact,
  SmartString,
};

pub mod classify;
pub mod engine;
pub mod scanner;
pub mod style;
pub mod task;

pub use autoindent_core::buffer::{
  BufferError,
  TextBuffer,
};

pub type Tendril = SmartString<LazyCompact>;
