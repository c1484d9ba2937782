use autoindent::{
  BufferError,
  TextBuffer,
  engine::{
    IndentError,
    compute_indent,
  },
  scanner::{
    Direction,
    count_unmatched_braces,
  },
  style::{
    CodeStyles,
    StyleConfig,
  },
  task::{
    IndentTask,
    LanguageBuffer,
  },
};
use ropey::Rope;

fn style(tab_size: usize, indent_size: usize, expand_tabs: bool) -> StyleConfig {
  StyleConfig::new(tab_size, indent_size, expand_tabs).unwrap()
}

/// Visual width of leading whitespace.
fn width(text: &str, tab_size: usize) -> usize {
  text
    .chars()
    .take_while(|&ch| ch == ' ' || ch == '\t')
    .map(|ch| if ch == '\t' { tab_size } else { 1 })
    .sum()
}

#[test]
fn quoted_closer_does_not_balance() {
  let doc = Rope::from("foo { \"}\" } ");
  let open = count_unmatched_braces(&doc, 5, Direction::Backward).unwrap();
  let close = count_unmatched_braces(&doc, 5, Direction::Forward).unwrap();
  assert_eq!((open, close), (1, 1));
}

#[test]
fn new_block_at_end_of_buffer_is_closed() {
  let mut doc = Rope::from("void foo() {\n");
  let cmd = compute_indent(&doc, doc.len_chars(), &style(4, 4, true)).unwrap();
  assert_eq!(cmd.offset, 13);
  assert_eq!(cmd.text.as_str(), "    \n}");
  assert_eq!(cmd.caret, 17);

  cmd.apply(&mut doc).unwrap();
  assert_eq!(doc.to_string(), "void foo() {\n    \n}");
  assert_eq!(doc.char(cmd.caret - 1), ' ');
  assert_eq!(doc.char(cmd.caret), '\n');
}

#[test]
fn block_already_closed_gets_indent_only() {
  let doc = Rope::from("if (x) {\n}\n");
  let cmd = compute_indent(&doc, 9, &style(4, 4, true)).unwrap();
  assert_eq!(cmd.text.as_str(), "    ");
  assert_eq!(cmd.caret, 13);
}

#[test]
fn closer_later_in_buffer_prevents_auto_close() {
  let doc = Rope::from("a {\n\nb();\n}\n");
  let cmd = compute_indent(&doc, 4, &style(4, 2, true)).unwrap();
  assert_eq!(cmd.text.as_str(), "  ");
}

#[test]
fn same_level_keeps_tab_width() {
  let doc = Rope::from("\tx = 1;\n");
  let with_tabs = compute_indent(&doc, 8, &style(4, 4, false)).unwrap();
  assert_eq!(with_tabs.text.as_str(), "\t");
  let with_spaces = compute_indent(&doc, 8, &style(4, 4, true)).unwrap();
  assert_eq!(with_spaces.text.as_str(), "    ");
}

#[test]
fn mixed_indent_is_measured_in_columns() {
  // Tab (8) + 2 spaces = 10 columns, written back as one tab + 2 spaces.
  let doc = Rope::from("\t  call();\n");
  let cmd = compute_indent(&doc, doc.len_chars(), &style(8, 4, false)).unwrap();
  assert_eq!(cmd.text.as_str(), "\t  ");

  // Same line opening a block: 14 columns.
  let doc = Rope::from("\t  if (y) {\n");
  let cmd = compute_indent(&doc, doc.len_chars(), &style(8, 4, false)).unwrap();
  assert_eq!(cmd.text.as_str(), "\t      \n\t  }");
}

#[test]
fn same_level_is_idempotent() {
  let style = style(4, 4, false);
  let mut doc = Rope::from("\tx = 1;\n");

  let first = compute_indent(&doc, 8, &style).unwrap();
  let caret = first.apply(&mut doc).unwrap();
  let second = compute_indent(&doc, caret, &style).unwrap();

  assert_eq!(width(&first.text, 4), width(&second.text, 4));
  assert_eq!(width(&second.text, 4), 4);
}

#[test]
fn invalid_caret_is_rejected() {
  let doc = Rope::from("abc");
  assert_eq!(
    compute_indent(&doc, 10, &StyleConfig::default()),
    Err(IndentError::InvalidOffset { offset: 10, len: 3 })
  );
}

/// A buffer whose reads start failing after a number of accesses.
struct ClosingBuffer {
  text:       Rope,
  reads_left: std::cell::Cell<usize>,
  inserts:    usize,
}

impl TextBuffer for ClosingBuffer {
  fn len_chars(&self) -> usize {
    self.text.len_chars()
  }

  fn char_at(&self, offset: usize) -> Result<char, BufferError> {
    let left = self.reads_left.get();
    if left == 0 {
      return Err(BufferError::Closed);
    }
    self.reads_left.set(left - 1);
    self.text.char_at(offset)
  }

  fn line_start(&self, offset: usize) -> Result<usize, BufferError> {
    self.text.line_start(offset)
  }

  fn insert(&mut self, offset: usize, text: &str) -> Result<(), BufferError> {
    self.inserts += 1;
    TextBuffer::insert(&mut self.text, offset, text)
  }
}

#[test]
fn buffer_errors_propagate_without_inserting() {
  let mut buffer = ClosingBuffer {
    text:       Rope::from("void foo() {\n"),
    reads_left: std::cell::Cell::new(3),
    inserts:    0,
  };
  let style = StyleConfig::default();

  let err = IndentTask::new(&mut buffer, &style).reindent(13).unwrap_err();
  assert_eq!(err, IndentError::Buffer(BufferError::Closed));
  assert_eq!(buffer.inserts, 0);
  assert_eq!(buffer.text.to_string(), "void foo() {\n");
}

#[test]
fn task_inserts_exactly_once() {
  let mut buffer = ClosingBuffer {
    text:       Rope::from("void foo() {\n"),
    reads_left: std::cell::Cell::new(usize::MAX),
    inserts:    0,
  };
  let style = StyleConfig::default();

  let caret = IndentTask::new(&mut buffer, &style).reindent(13).unwrap();
  assert_eq!(caret, 17);
  assert_eq!(buffer.inserts, 1);
}

#[test]
fn styles_follow_buffer_language() {
  let styles = CodeStyles::from_toml(
    r#"
    [default]
    indent-size = 2

    [languages.vala]
    tab-size = 4
    indent-size = 4
    expand-tabs = false
    "#,
  )
  .unwrap();

  let mut vala = LanguageBuffer::new(Rope::from("namespace Foo {\n"), "vala");
  let mut plain = LanguageBuffer::untagged(Rope::from("namespace Foo {\n"));

  assert_eq!(IndentTask::new(&mut vala, &styles).reindent(16).unwrap(), 17);
  assert_eq!(IndentTask::new(&mut plain, &styles).reindent(16).unwrap(), 18);
  assert_eq!(vala.inner().to_string(), "namespace Foo {\n\t\n}");
  assert_eq!(plain.into_inner().to_string(), "namespace Foo {\n  \n}");
}
