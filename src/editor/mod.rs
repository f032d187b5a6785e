//! CodeEditor - the editor component a host embeds.
//!
//! Wraps the [`EditableState`] engine together with the pieces of UI state the
//! engine does not own: the surface selection, the shared scroll viewport and
//! the cached highlight markup. The host keeps the authoritative buffer and
//! passes it in on every call:
//!
//! ```text
//! key_down(value, key) ──► KeyOutcome ──► PassThrough ──► input(value, edit)
//!                                     └─► Replace(change) ─┐        │
//!                                                           ▼        ▼
//!                                  host applies change.text ◄── BufferChange
//!                                                           │
//!                                  render(value, language, origin) ──► EditorView
//! ```

mod viewport;

pub use viewport::{gutter_lines, Viewport};

use crate::editable::{
    BufferChange, ChangeOrigin, EditableState, EditorKey, KeyOutcome, Selection, SurfaceEdit,
    TextSurface,
};
use crate::syntax::{render_markup, Highlighter, Language};

/// Everything the host needs to draw the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    /// Highlighted markup for the layer under the surface
    pub markup: String,
    /// 1-based line numbers for the gutter
    pub gutter: Vec<usize>,
    /// Caret/selection on the editable surface
    pub selection: Selection,
    /// Scroll position of the surface and highlight layer
    pub viewport: Viewport,
}

impl EditorView {
    /// Scroll position of the gutter
    pub fn gutter_viewport(&self) -> Viewport {
        self.viewport.gutter_offset()
    }
}

/// Result of a default edit on the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputChange {
    pub change: BufferChange,
    /// Text removed by a cut, for the host to put on the clipboard
    pub cut: Option<String>,
}

#[derive(Debug, Clone)]
struct MarkupCache {
    text: String,
    language: Language,
    markup: String,
}

/// Editor component for one (problem, language) pairing.
///
/// Switching pairing means building a new `CodeEditor`; history never
/// carries over.
#[derive(Debug, Clone)]
pub struct CodeEditor {
    engine: EditableState,
    selection: Selection,
    viewport: Viewport,
    markup: Option<MarkupCache>,
}

impl CodeEditor {
    /// Mount an editor showing `initial` with the caret at the start
    pub fn new(initial: &str) -> Self {
        Self {
            engine: EditableState::new(initial),
            selection: Selection::caret(0),
            viewport: Viewport::default(),
            markup: None,
        }
    }

    pub fn engine(&self) -> &EditableState {
        &self.engine
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Move the caret or selection (mouse, arrow keys)
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Scrolling the surface moves every layer
    pub fn scroll(&mut self, scroll_top: u32, scroll_left: u32) {
        self.viewport = Viewport::new(scroll_top, scroll_left);
    }

    /// Offer a key press to the engine before default editing.
    ///
    /// On [`KeyOutcome::PassThrough`] the host should follow up with
    /// [`CodeEditor::input`].
    pub fn key_down(&mut self, value: &str, key: EditorKey) -> KeyOutcome {
        self.engine.handle_key(value, self.selection, key)
    }

    /// Apply a default edit (typing, paste, cut, delete) and record it.
    ///
    /// Returns None when the edit leaves the buffer unchanged.
    pub fn input(&mut self, value: &str, edit: SurfaceEdit) -> Option<InputChange> {
        let output = TextSurface::new(value, self.selection).apply(edit)?;
        self.selection = output.selection;
        let caret = output.caret();
        let change = self.engine.record_user_edit(output.text, caret);
        Some(InputChange {
            change,
            cut: output.clipboard,
        })
    }

    /// Bring the engine in line with `value`: fold it into history when it
    /// came from outside and apply any pending caret exactly once.
    pub fn sync(&mut self, value: &str, origin: ChangeOrigin) {
        if self.engine.reconcile(value, origin) {
            tracing::debug!("editor: external change, caret reset");
            self.selection = Selection::caret(0);
        }
        if let Some(caret) = self.engine.take_pending_caret() {
            self.selection = Selection::caret(caret);
        }
        self.selection = self.selection.clamped(value.chars().count());
    }

    /// Render `value` after [`CodeEditor::sync`]
    pub fn render(
        &mut self,
        value: &str,
        language: Language,
        origin: ChangeOrigin,
        highlighter: Option<&mut dyn Highlighter>,
    ) -> EditorView {
        self.sync(value, origin);

        EditorView {
            markup: self.markup_for(value, language, highlighter),
            gutter: gutter_lines(value),
            selection: self.selection,
            viewport: self.viewport,
        }
    }

    fn markup_for(
        &mut self,
        value: &str,
        language: Language,
        highlighter: Option<&mut dyn Highlighter>,
    ) -> String {
        if let Some(cache) = &self.markup {
            if cache.language == language && cache.text == value {
                return cache.markup.clone();
            }
        }
        let markup = render_markup(value, language, highlighter);
        self.markup = Some(MarkupCache {
            text: value.to_string(),
            language,
            markup: markup.clone(),
        });
        markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::HighlightSpan;

    /// Counts calls so cache hits are observable
    #[derive(Default)]
    struct CountingHighlighter {
        calls: usize,
    }

    impl Highlighter for CountingHighlighter {
        fn highlight(&mut self, _source: &str, _language: Language) -> Option<Vec<HighlightSpan>> {
            self.calls += 1;
            Some(Vec::new())
        }

        fn supports(&self, _language: Language) -> bool {
            true
        }
    }

    #[test]
    fn test_render_applies_pending_caret_once() {
        let mut editor = CodeEditor::new("if (x)");
        editor.select(Selection::caret(6));
        let change = editor
            .key_down("if (x)", EditorKey::Char('{'))
            .into_change()
            .unwrap();
        assert_eq!(change.text, "if (x) {");

        let view = editor.render(&change.text, Language::C, change.origin, None);
        assert_eq!(view.selection, Selection::caret(8));

        editor.select(Selection::caret(2));
        let view = editor.render(&change.text, Language::C, ChangeOrigin::UserEdit, None);
        assert_eq!(view.selection, Selection::caret(2));
    }

    #[test]
    fn test_input_records_history() {
        let mut editor = CodeEditor::new("ab");
        editor.select(Selection::caret(2));
        let input = editor
            .input("ab", SurfaceEdit::InsertText("c".into()))
            .unwrap();
        assert_eq!(input.change.text, "abc");
        assert_eq!(input.change.caret, 3);
        assert_eq!(editor.selection(), Selection::caret(3));
        assert!(editor.engine().can_undo());
        assert_eq!(editor.engine().history().current().caret, 3);
    }

    #[test]
    fn test_cut_returns_removed_text() {
        let mut editor = CodeEditor::new("hello world");
        editor.select(Selection::new(0, 6));
        let input = editor.input("hello world", SurfaceEdit::Cut).unwrap();
        assert_eq!(input.change.text, "world");
        assert_eq!(input.cut.as_deref(), Some("hello "));
    }

    #[test]
    fn test_external_change_resets_caret() {
        let mut editor = CodeEditor::new("old");
        editor.select(Selection::caret(3));
        let view = editor.render("brand new", Language::Java, ChangeOrigin::ExternalReset, None);
        assert_eq!(view.selection, Selection::caret(0));
        assert_eq!(editor.engine().history().len(), 2);
    }

    #[test]
    fn test_markup_cached_by_text_and_language() {
        let mut editor = CodeEditor::new("x");
        let mut highlighter = CountingHighlighter::default();

        editor.render("x", Language::Python, ChangeOrigin::UserEdit, Some(&mut highlighter));
        editor.render("x", Language::Python, ChangeOrigin::UserEdit, Some(&mut highlighter));
        assert_eq!(highlighter.calls, 1);

        editor.render("x", Language::C, ChangeOrigin::UserEdit, Some(&mut highlighter));
        assert_eq!(highlighter.calls, 2);
    }

    #[test]
    fn test_scroll_is_shared() {
        let mut editor = CodeEditor::new("a\nb\n");
        editor.scroll(30, 12);
        let view = editor.render("a\nb\n", Language::C, ChangeOrigin::UserEdit, None);
        assert_eq!(view.viewport, Viewport::new(30, 12));
        assert_eq!(view.gutter_viewport(), Viewport::new(30, 0));
        assert_eq!(view.gutter, vec![1, 2, 3]);
    }
}
