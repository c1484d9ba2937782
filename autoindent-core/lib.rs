//! Text primitives shared by the indentation crates: character classes,
//! line endings, and the [`buffer::TextBuffer`] capability trait.

pub mod buffer;
pub mod chars;
pub mod line_ending;

pub use ropey::{
  Rope,
  RopeSlice,
};
