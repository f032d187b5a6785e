//! EditableState - the editor engine: smart editing keys, undo/redo history
//! and reconciliation with a buffer owned by someone else.
//!
//! The owner holds the authoritative text. Every method takes the current value
//! as input and returns the replacement the owner should apply; the history
//! kept here is a derived cache of values the owner has shown.

use super::buffer::{StringBuffer, TextBuffer, TextBufferMut};
use super::history::{EditHistory, HistoryEntry};
use super::indent;
use super::keys::{BufferChange, ChangeOrigin, EditorKey, KeyOutcome};
use super::selection::Selection;

/// Editor engine state for one (problem, language) pairing.
#[derive(Debug, Clone)]
pub struct EditableState {
    history: EditHistory,
    /// Caret to place on the next render, consumed once
    pending_caret: Option<usize>,
}

impl EditableState {
    /// Create the engine for a freshly mounted editor showing `initial`
    pub fn new(initial: &str) -> Self {
        Self {
            history: EditHistory::new(initial),
            pending_caret: None,
        }
    }

    /// Create the engine with a custom history capacity
    pub fn with_capacity(initial: &str, capacity: usize) -> Self {
        Self {
            history: EditHistory::with_max_size(initial, capacity),
            pending_caret: None,
        }
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Caret waiting to be restored, without consuming it
    pub fn pending_caret(&self) -> Option<usize> {
        self.pending_caret
    }

    /// Take the caret to restore on this render. Returns it exactly once.
    pub fn take_pending_caret(&mut self) -> Option<usize> {
        self.pending_caret.take()
    }

    /// Offer a key press to the engine before the surface handles it.
    pub fn handle_key(&mut self, value: &str, selection: Selection, key: EditorKey) -> KeyOutcome {
        let buffer = StringBuffer::from_text(value);
        let selection = selection.clamped(buffer.len_chars());

        match key {
            EditorKey::Undo => self.undo(),
            EditorKey::Redo => self.redo(),
            EditorKey::Tab => {
                let change = self.replace_selection(buffer, selection, indent::INDENT_UNIT);
                KeyOutcome::Replace(change)
            }
            EditorKey::Enter => KeyOutcome::Replace(self.insert_newline(buffer, selection)),
            EditorKey::Char('}') => self.close_brace(buffer, selection),
            EditorKey::Char('{') => self.open_brace(buffer, selection),
            EditorKey::Char(_) => KeyOutcome::PassThrough,
        }
    }

    /// Record text produced by the surface's default editing.
    pub fn record_user_edit(&mut self, text: String, caret: usize) -> BufferChange {
        if self.history.push(&text, caret) {
            tracing::debug!(
                index = self.history.index(),
                len = self.history.len(),
                caret,
                "history: recorded user edit"
            );
        }
        BufferChange::new(text, caret, ChangeOrigin::UserEdit)
    }

    /// Fold a value supplied by the owner into history.
    ///
    /// Values resulting from undo/redo are never recorded. Anything else that
    /// differs from the current entry is appended with the caret at 0, since
    /// the caret of an external change is unknown. Returns true when an entry
    /// was appended.
    pub fn reconcile(&mut self, value: &str, origin: ChangeOrigin) -> bool {
        if !origin.records_history() {
            return false;
        }
        if self.history.current().text == value {
            return false;
        }
        self.history.push(value, 0);
        tracing::debug!(
            ?origin,
            index = self.history.index(),
            len = self.history.len(),
            "history: folded in external change"
        );
        true
    }

    /// Step back one history entry
    pub fn undo(&mut self) -> KeyOutcome {
        match self.history.undo() {
            Some(entry) => {
                let change = Self::navigate_to(entry);
                self.pending_caret = Some(change.caret);
                KeyOutcome::Replace(change)
            }
            None => KeyOutcome::Suppressed,
        }
    }

    /// Step forward one history entry
    pub fn redo(&mut self) -> KeyOutcome {
        match self.history.redo() {
            Some(entry) => {
                let change = Self::navigate_to(entry);
                self.pending_caret = Some(change.caret);
                KeyOutcome::Replace(change)
            }
            None => KeyOutcome::Suppressed,
        }
    }

    fn navigate_to(entry: &HistoryEntry) -> BufferChange {
        BufferChange::new(
            entry.text.clone(),
            entry.caret,
            ChangeOrigin::HistoryNavigation,
        )
    }

    /// Enter: keep the current indent, add a level after a block opener, and
    /// split an empty bracket pair onto three lines.
    fn insert_newline(&mut self, buffer: StringBuffer, selection: Selection) -> BufferChange {
        let start = selection.start();
        let (_, line) = indent::line_prefix(&buffer, start);
        let new_indent = indent::next_line_indent(&line);

        let inserted = if indent::is_between_empty_pair(&buffer, start) {
            let closing_indent = indent::dedent(&new_indent);
            format!("\n{new_indent}\n{closing_indent}")
        } else {
            format!("\n{new_indent}")
        };
        let caret = start + 1 + new_indent.chars().count();

        self.commit(buffer, start..selection.end(), &inserted, caret)
    }

    /// `}` on a whitespace-only line drops one indentation level first.
    fn close_brace(&mut self, buffer: StringBuffer, selection: Selection) -> KeyOutcome {
        let start = selection.start();
        let (line_start, line) = indent::line_prefix(&buffer, start);
        if !indent::can_dedent(&line) {
            return KeyOutcome::PassThrough;
        }

        let dedented = indent::dedent(&line);
        let caret = line_start + dedented.chars().count() + 1;
        let inserted = format!("{dedented}}}");
        KeyOutcome::Replace(self.commit(buffer, line_start..selection.end(), &inserted, caret))
    }

    /// `{` right after a word or `)` gets a separating space.
    fn open_brace(&mut self, buffer: StringBuffer, selection: Selection) -> KeyOutcome {
        if !indent::wants_space_before_brace(buffer.char_before(selection.start())) {
            return KeyOutcome::PassThrough;
        }
        KeyOutcome::Replace(self.replace_selection(buffer, selection, " {"))
    }

    fn replace_selection(
        &mut self,
        buffer: StringBuffer,
        selection: Selection,
        text: &str,
    ) -> BufferChange {
        let caret = selection.start() + text.chars().count();
        self.commit(buffer, selection.start()..selection.end(), text, caret)
    }

    /// Apply an override edit, record it and arm caret restoration
    fn commit(
        &mut self,
        mut buffer: StringBuffer,
        range: std::ops::Range<usize>,
        text: &str,
        caret: usize,
    ) -> BufferChange {
        buffer.replace(range, text);
        let change = self.record_user_edit(buffer.into_string(), caret);
        self.pending_caret = Some(caret);
        change
    }
}
