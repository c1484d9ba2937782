//! Host-facing reindent entry point.
//!
//! An [`IndentTask`] is created by the host when a newline is typed. It reads
//! the style once, computes the whole command, and only then performs the one
//! insertion, so a failed request never leaves a half-applied edit behind.
//! Requests on the same buffer must be serialized by the host.

use autoindent_core::{
  buffer::{
    Direction,
    Result as BufferResult,
    TextBuffer,
  },
  line_ending::LineEnding,
};

use crate::{
  engine::{
    Result,
    compute_indent,
  },
  style::{
    LanguageId,
    StyleConfig,
    StyleResolver,
  },
};

pub struct IndentTask<'a, B: ?Sized, R: ?Sized> {
  buffer:   &'a mut B,
  resolver: &'a R,
}

impl<'a, B, R> IndentTask<'a, B, R>
where
  B: TextBuffer + ?Sized,
  R: StyleResolver<B> + ?Sized,
{
  pub fn new(buffer: &'a mut B, resolver: &'a R) -> Self {
    Self { buffer, resolver }
  }

  pub fn style(&self) -> StyleConfig {
    self.resolver.resolve(&*self.buffer)
  }

  /// Indents the line holding `caret` and returns the new caret offset.
  pub fn reindent(&mut self, caret: usize) -> Result<usize> {
    let style = self.style();
    let command = compute_indent(&*self.buffer, caret, &style)?;
    command.apply(&mut *self.buffer)
  }

  pub fn buffer(&self) -> &B {
    &*self.buffer
  }
}

/// A buffer tagged with the language it holds, so per-language styles can be
/// looked up for it.
#[derive(Debug, Clone)]
pub struct LanguageBuffer<B> {
  inner:    B,
  language: Option<String>,
}

impl<B> LanguageBuffer<B> {
  pub fn new(inner: B, language: impl Into<String>) -> Self {
    Self {
      inner,
      language: Some(language.into()),
    }
  }

  pub fn untagged(inner: B) -> Self {
    Self {
      inner,
      language: None,
    }
  }

  pub fn inner(&self) -> &B {
    &self.inner
  }

  pub fn into_inner(self) -> B {
    self.inner
  }
}

impl<B> LanguageId for LanguageBuffer<B> {
  fn language(&self) -> Option<&str> {
    self.language.as_deref()
  }
}

impl<B: TextBuffer> TextBuffer for LanguageBuffer<B> {
  fn len_chars(&self) -> usize {
    self.inner.len_chars()
  }

  fn char_at(&self, offset: usize) -> BufferResult<char> {
    self.inner.char_at(offset)
  }

  fn line_start(&self, offset: usize) -> BufferResult<usize> {
    self.inner.line_start(offset)
  }

  fn insert(&mut self, offset: usize, text: &str) -> BufferResult<()> {
    self.inner.insert(offset, text)
  }

  fn chars_from(
    &self,
    offset: usize,
    direction: Direction,
  ) -> BufferResult<impl Iterator<Item = BufferResult<char>> + '_> {
    self.inner.chars_from(offset, direction)
  }

  fn line_ending(&self) -> LineEnding {
    self.inner.line_ending()
  }
}
