//! Default editing behaviour of the editable surface.
//!
//! This is what happens to a key or clipboard action when the engine lets it
//! pass through: plain insertion, deletion, cut and paste against the current
//! buffer and selection. The surface never touches history; the engine records
//! whatever text it produces.

use super::buffer::{StringBuffer, TextBuffer, TextBufferMut};
use super::selection::Selection;

/// A default editing action on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEdit {
    /// Type a string (a single character for normal typing)
    InsertText(String),
    /// Backspace
    DeleteBackward,
    /// Delete key
    DeleteForward,
    /// Remove the selection; the removed text goes to the clipboard
    Cut,
    /// Insert clipboard text over the selection
    Paste(String),
}

/// Text and caret after a surface edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOutput {
    pub text: String,
    pub selection: Selection,
    /// Text removed by [`SurfaceEdit::Cut`]
    pub clipboard: Option<String>,
}

impl SurfaceOutput {
    pub fn caret(&self) -> usize {
        self.selection.head
    }
}

/// Editable text surface over a borrowed value and the surface's selection.
#[derive(Debug, Clone)]
pub struct TextSurface {
    buffer: StringBuffer,
    selection: Selection,
}

impl TextSurface {
    pub fn new(value: &str, selection: Selection) -> Self {
        let buffer = StringBuffer::from_text(value);
        let selection = selection.clamped(buffer.len_chars());
        Self { buffer, selection }
    }

    /// Apply a default edit.
    ///
    /// Returns None when the edit changes nothing (backspace at offset 0,
    /// delete at the end, cut of an empty selection).
    pub fn apply(mut self, edit: SurfaceEdit) -> Option<SurfaceOutput> {
        let mut clipboard = None;
        match edit {
            SurfaceEdit::InsertText(text) | SurfaceEdit::Paste(text) => {
                self.replace_selection(&text);
            }
            SurfaceEdit::DeleteBackward => {
                if self.selection.is_empty() {
                    let caret = self.selection.head;
                    if caret == 0 {
                        return None;
                    }
                    self.buffer.remove(caret - 1..caret);
                    self.selection = Selection::caret(caret - 1);
                } else {
                    self.replace_selection("");
                }
            }
            SurfaceEdit::DeleteForward => {
                if self.selection.is_empty() {
                    let caret = self.selection.head;
                    if caret >= self.buffer.len_chars() {
                        return None;
                    }
                    self.buffer.remove(caret..caret + 1);
                } else {
                    self.replace_selection("");
                }
            }
            SurfaceEdit::Cut => {
                if self.selection.is_empty() {
                    return None;
                }
                clipboard = Some(
                    self.buffer
                        .slice(self.selection.start()..self.selection.end()),
                );
                self.replace_selection("");
            }
        }

        Some(SurfaceOutput {
            text: self.buffer.into_string(),
            selection: self.selection,
            clipboard,
        })
    }

    fn replace_selection(&mut self, text: &str) {
        let start = self.selection.start();
        self.buffer.replace(start..self.selection.end(), text);
        self.selection = Selection::caret(start + text.chars().count());
    }
}
