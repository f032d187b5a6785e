//! Editor rendered as numbered lines of markup

use crate::editor::EditorView;
use crate::syntax::LINE_BREAK_SENTINEL;

/// Gutter numbers beside the markup, one row per line
pub fn render_editor(view: &EditorView) -> String {
    let markup = view
        .markup
        .strip_suffix(LINE_BREAK_SENTINEL)
        .unwrap_or(&view.markup);
    let width = view.gutter.len().to_string().len().max(3);

    view.gutter
        .iter()
        .zip(markup.split('\n'))
        .map(|(n, line)| format!("{:>width$} | {}", n, line, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}
