//! Keystroke behaviours - Tab, Enter, braces and caret restoration

mod common;

use codedaily::editable::{EditorKey, KeyOutcome, Selection};
use common::Host;

// ========================================================================
// Tab
// ========================================================================

#[test]
fn test_tab_inserts_four_spaces() {
    let mut host = Host::with_caret("ab", 1);
    host.key(EditorKey::Tab);
    assert_eq!(host.value, "a    b");
    assert_eq!(host.caret(), 5);
}

#[test]
fn test_tab_replaces_selection() {
    let mut host = Host::new("return foo;");
    host.editor.select(Selection::new(7, 10));
    host.key(EditorKey::Tab);
    assert_eq!(host.value, "return     ;");
    assert_eq!(host.caret(), 11);
}

// ========================================================================
// Enter
// ========================================================================

#[test]
fn test_enter_after_block_opener_adds_level() {
    let line = "    if (x) {";
    let mut host = Host::with_caret(line, line.len());
    host.key(EditorKey::Enter);
    assert_eq!(host.value, "    if (x) {\n        ");
    assert_eq!(host.caret(), host.value.len());
}

#[test]
fn test_enter_keeps_plain_indent() {
    let line = "        int y = 0;";
    let mut host = Host::with_caret(line, line.len());
    host.key(EditorKey::Enter);
    assert_eq!(host.value, "        int y = 0;\n        ");
}

#[test]
fn test_enter_after_python_colon() {
    let line = "    def twoSum(self, nums):   ";
    let mut host = Host::with_caret(line, line.len());
    host.key(EditorKey::Enter);
    assert!(host.value.ends_with("\n        "));
}

#[test]
fn test_enter_inside_empty_braces() {
    let mut host = Host::with_caret("foo() {}", 7);
    host.key(EditorKey::Enter);
    assert_eq!(host.value, "foo() {\n    \n}");
    assert_eq!(host.caret(), 12);

    host.type_text("return;");
    assert_eq!(host.value, "foo() {\n    return;\n}");
}

#[test]
fn test_enter_inside_empty_brackets_keeps_outer_indent() {
    let text = "    int[] a = new int[]{}";
    let mut host = Host::with_caret(text, text.len() - 1);
    host.key(EditorKey::Enter);
    assert_eq!(host.value, "    int[] a = new int[]{\n        \n    }");
}

#[test]
fn test_enter_replaces_selection() {
    let mut host = Host::new("a bc");
    host.editor.select(Selection::new(1, 3));
    host.key(EditorKey::Enter);
    assert_eq!(host.value, "a\nc");
    assert_eq!(host.caret(), 2);
}

// ========================================================================
// Braces
// ========================================================================

#[test]
fn test_close_brace_dedents_whitespace_line() {
    let text = "if (x) {\n        ";
    let mut host = Host::with_caret(text, text.len());
    host.key(EditorKey::Char('}'));
    assert_eq!(host.value, "if (x) {\n    }");
    assert_eq!(host.caret(), host.value.len());
}

#[test]
fn test_close_brace_after_code_inserts_normally() {
    let text = "    x = 1; ";
    let mut host = Host::with_caret(text, text.len());
    let outcome = host.key(EditorKey::Char('}'));
    assert_eq!(outcome, KeyOutcome::PassThrough);
    assert_eq!(host.value, "    x = 1; }");
}

#[test]
fn test_close_brace_short_indent_inserts_normally() {
    let mut host = Host::with_caret("  ", 2);
    assert_eq!(host.key(EditorKey::Char('}')), KeyOutcome::PassThrough);
    assert_eq!(host.value, "  }");
}

#[test]
fn test_open_brace_after_paren_adds_space() {
    let mut host = Host::with_caret("if (x)", 6);
    host.key(EditorKey::Char('{'));
    assert_eq!(host.value, "if (x) {");
    assert_eq!(host.caret(), 8);
}

#[test]
fn test_open_brace_after_space_or_bracket_is_plain() {
    let mut host = Host::with_caret("x = ", 4);
    assert_eq!(host.key(EditorKey::Char('{')), KeyOutcome::PassThrough);
    assert_eq!(host.value, "x = {");

    let mut host = Host::with_caret("f(", 2);
    host.key(EditorKey::Char('{'));
    assert_eq!(host.value, "f({");

    let mut host = Host::with_caret("", 0);
    host.key(EditorKey::Char('{'));
    assert_eq!(host.value, "{");
}

#[test]
fn test_typing_a_block() {
    let mut host = Host::with_caret("", 0);
    host.type_text("while(true){\nx++;\n}");
    assert_eq!(host.value, "while(true) {\n    x++;\n}");
}

// ========================================================================
// Caret restoration
// ========================================================================

#[test]
fn test_pending_caret_applied_once() {
    let mut host = Host::with_caret("ab", 1);
    host.editor.key_down("ab", EditorKey::Tab);
    assert_eq!(host.editor.engine().pending_caret(), Some(5));

    host.value = "a    b".into();
    let view = host.render();
    assert_eq!(view.selection, Selection::caret(5));
    assert_eq!(host.editor.engine().pending_caret(), None);

    // A later render does not move a caret the user placed
    host.editor.select(Selection::caret(0));
    let view = host.render();
    assert_eq!(view.selection, Selection::caret(0));
}

#[test]
fn test_multibyte_text_uses_char_offsets() {
    let text = "s = \"héllo\"";
    let mut host = Host::with_caret(text, text.chars().count());
    host.key(EditorKey::Tab);
    assert_eq!(host.value, "s = \"héllo\"    ");
    assert_eq!(host.caret(), text.chars().count() + 4);
}
