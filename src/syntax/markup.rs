//! Highlighted markup for the editor's display layer.
//!
//! Markup is a pure function of `(source, language)` plus whatever highlighter
//! is available. Without highlighting support the escaped source is returned.

use super::highlights::flatten_spans;
use super::languages::Language;
use super::parser::Highlighter;

/// Appended so a trailing empty line still occupies a row in the display layer
pub const LINE_BREAK_SENTINEL: &str = "<br>";

/// Escape the characters that would otherwise be read as markup
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    push_escaped(&mut escaped, text);
    escaped
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Plain markup: escaped text plus the line-break sentinel
pub fn plain_markup(source: &str) -> String {
    let mut markup = escape_text(source);
    markup.push_str(LINE_BREAK_SENTINEL);
    markup
}

/// Render `source` as highlighted markup.
///
/// Falls back to [`plain_markup`] when no highlighter is given or the
/// highlighter cannot handle `language`.
pub fn render_markup(
    source: &str,
    language: Language,
    highlighter: Option<&mut dyn Highlighter>,
) -> String {
    let spans = match highlighter.and_then(|h| h.highlight(source, language)) {
        Some(spans) => flatten_spans(spans),
        None => {
            tracing::debug!(?language, "highlighting unavailable, rendering plain text");
            return plain_markup(source);
        }
    };

    let mut markup = String::with_capacity(source.len() * 2);
    let mut pos = 0usize;
    for span in spans {
        let (start, end) = (span.range.start, span.range.end.min(source.len()));
        if start < pos
            || start >= end
            || !source.is_char_boundary(start)
            || !source.is_char_boundary(end)
        {
            continue;
        }
        push_escaped(&mut markup, &source[pos..start]);
        markup.push_str("<span class=\"");
        markup.push_str(&span.css_class());
        markup.push_str("\">");
        push_escaped(&mut markup, &source[start..end]);
        markup.push_str("</span>");
        pos = end;
    }
    push_escaped(&mut markup, &source[pos..]);
    markup.push_str(LINE_BREAK_SENTINEL);
    markup
}
