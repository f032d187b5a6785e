//! Indentation helpers used by the smart-editing key handlers.

use super::buffer::TextBuffer;

/// One indentation level
pub const INDENT_UNIT: &str = "    ";

/// Width of [`INDENT_UNIT`] in characters
pub const INDENT_WIDTH: usize = INDENT_UNIT.len();

/// Characters that open a block when they end a line
pub const BLOCK_OPENERS: [char; 4] = ['{', ':', '(', '['];

/// Characters after which `{` is typed without an automatic space
const BRACE_SPACE_EXEMPT: [char; 3] = ['(', '[', '{'];

/// Text of the current line from its start up to `offset`, plus the line start
pub fn line_prefix<B: TextBuffer>(buffer: &B, offset: usize) -> (usize, String) {
    let start = buffer.line_start(offset);
    (start, buffer.slice(start..offset))
}

/// Leading whitespace of `line`
pub fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start_matches(char::is_whitespace);
    &line[..line.len() - trimmed.len()]
}

/// Whether `line`, ignoring trailing whitespace, ends with a block opener
pub fn ends_with_block_opener(line: &str) -> bool {
    line.trim_end().ends_with(BLOCK_OPENERS)
}

/// Whether the caret sits inside `{}`, `[]` or `()` with nothing between
pub fn is_between_empty_pair<B: TextBuffer>(buffer: &B, offset: usize) -> bool {
    matches!(
        (buffer.char_before(offset), buffer.char_at(offset)),
        (Some('{'), Some('}')) | (Some('['), Some(']')) | (Some('('), Some(')'))
    )
}

/// Indent for a new line opened from `line_before_caret`
pub fn next_line_indent(line_before_caret: &str) -> String {
    let mut indent = leading_whitespace(line_before_caret).to_string();
    if ends_with_block_opener(line_before_caret) {
        indent.push_str(INDENT_UNIT);
    }
    indent
}

/// `indent` with its last indentation level removed (saturating)
pub fn dedent(indent: &str) -> String {
    let keep = indent.chars().count().saturating_sub(INDENT_WIDTH);
    indent.chars().take(keep).collect()
}

/// Whether a line prefix qualifies for auto-dedent before `}`
pub fn can_dedent(line_before_caret: &str) -> bool {
    !line_before_caret.is_empty()
        && line_before_caret.chars().all(char::is_whitespace)
        && line_before_caret.chars().count() >= INDENT_WIDTH
}

/// Whether typing `{` after `prev` should insert `" {"`
pub fn wants_space_before_brace(prev: Option<char>) -> bool {
    match prev {
        Some(ch) => !ch.is_whitespace() && !BRACE_SPACE_EXEMPT.contains(&ch),
        None => false,
    }
}
