#![no_main]

use autoindent::{
  engine::compute_indent,
  style::StyleConfig,
};
use libfuzzer_sys::fuzz_target;
use ropey::Rope;

const MAX_TEXT_BYTES: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
  let [caret_hi, caret_lo, knobs, rest @ ..] = data else {
    return;
  };
  let rest = &rest[..rest.len().min(MAX_TEXT_BYTES)];

  let mut doc = Rope::from(String::from_utf8_lossy(rest).as_ref());
  let caret = usize::from(u16::from_be_bytes([*caret_hi, *caret_lo])) % (doc.len_chars() + 1);
  let tab_size = usize::from(knobs & 0x07) + 1;
  let indent_size = usize::from((knobs >> 3) & 0x07) + 1;
  let Ok(style) = StyleConfig::new(tab_size, indent_size, knobs & 0x40 != 0) else {
    return;
  };

  let before = doc.len_chars();
  let cmd = compute_indent(&doc, caret, &style).expect("in-range caret must not fail");
  let inserted = cmd.text.chars().count();

  assert!(cmd.offset <= caret);
  assert!(cmd.caret >= cmd.offset && cmd.caret <= cmd.offset + inserted);
  assert!(
    cmd
      .text
      .chars()
      .take(cmd.indent_len())
      .all(|ch| ch == ' ' || ch == '\t')
  );
  if inserted > cmd.indent_len() {
    assert!(cmd.text.ends_with('}'));
  }

  let new_caret = cmd.apply(&mut doc).expect("insertion in bounds");
  assert_eq!(new_caret, cmd.caret);
  assert_eq!(doc.len_chars(), before + inserted);
});
