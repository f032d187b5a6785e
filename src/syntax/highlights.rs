//! Syntax highlighting data structures
//!
//! Defines capture names and the highlighted spans produced for a buffer.

use std::ops::Range;

/// Standard tree-sitter capture names we color.
/// Index into this array is the HighlightId.
pub const HIGHLIGHT_NAMES: &[&str] = &[
    "attribute",             // @attribute (Java annotations, Python decorators)
    "boolean",               // @boolean (true, false)
    "comment",               // @comment
    "constant",              // @constant
    "constant.builtin",      // @constant.builtin (null, None, nullptr)
    "constructor",           // @constructor
    "delimiter",             // @delimiter (C: ; ,)
    "escape",                // @escape (string escapes)
    "function",              // @function
    "function.builtin",      // @function.builtin (print, len)
    "function.method",       // @function.method
    "keyword",               // @keyword
    "label",                 // @label
    "number",                // @number
    "operator",              // @operator
    "property",              // @property
    "punctuation",           // @punctuation
    "punctuation.bracket",   // @punctuation.bracket
    "punctuation.delimiter", // @punctuation.delimiter
    "string",                // @string
    "string.special",        // @string.special
    "type",                  // @type
    "type.builtin",          // @type.builtin (int, char, bool)
    "variable",              // @variable
    "variable.builtin",      // @variable.builtin (self, this)
    "variable.parameter",    // @variable.parameter
];

/// Index into HIGHLIGHT_NAMES
pub type HighlightId = u16;

/// A highlighted byte range of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Byte range into the source (start inclusive, end exclusive)
    pub range: Range<usize>,
    /// Index into HIGHLIGHT_NAMES
    pub highlight: HighlightId,
}

impl HighlightSpan {
    pub fn new(range: Range<usize>, highlight: HighlightId) -> Self {
        Self { range, highlight }
    }

    /// Capture name of this span
    pub fn name(&self) -> &'static str {
        HIGHLIGHT_NAMES
            .get(self.highlight as usize)
            .copied()
            .unwrap_or("text")
    }

    /// Class attribute used in markup (`keyword.function` -> `hl-keyword-function`)
    pub fn css_class(&self) -> String {
        format!("hl-{}", self.name().replace('.', "-"))
    }
}

/// Sort spans and drop overlaps so every byte belongs to at most one span.
///
/// Earlier-starting spans win; a later span that starts inside an emitted one
/// keeps only the part past its end. Captures of the same range come in query
/// pattern order and the last one wins, so specific patterns override the
/// generic ones listed before them.
pub fn flatten_spans(mut spans: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    spans.sort_by_key(|s| (s.range.start, std::cmp::Reverse(s.range.end)));

    let mut flat: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    let mut covered = 0usize;
    for span in spans {
        if let Some(last) = flat.last_mut() {
            if last.range == span.range {
                last.highlight = span.highlight;
                continue;
            }
        }
        let start = span.range.start.max(covered);
        if start >= span.range.end {
            continue;
        }
        covered = span.range.end;
        flat.push(HighlightSpan::new(start..span.range.end, span.highlight));
    }
    flat
}

/// Look up highlight ID by capture name
pub fn highlight_id_for_name(name: &str) -> Option<HighlightId> {
    // Handle hierarchical names: try exact match first, then progressively shorter
    // parents (e.g. "keyword.control.import" -> "keyword.control" -> "keyword").
    let mut current = name;
    loop {
        if let Some(pos) = HIGHLIGHT_NAMES.iter().position(|&n| n == current) {
            return Some(pos as HighlightId);
        }

        let Some(dot_pos) = current.rfind('.') else {
            break;
        };
        current = &current[..dot_pos];
    }

    None
}
