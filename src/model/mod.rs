//! Application model - the complete state of the practice session
//!
//! The model owns the authoritative code buffer. The editor component only
//! derives history and markup from it; see [`crate::editor::CodeEditor`].

pub mod console;

pub use console::ConsoleState;

use crate::catalog::{Catalog, Problem};
use crate::editable::ChangeOrigin;
use crate::editor::{CodeEditor, EditorView};
use crate::syntax::{Highlighter, Language};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    catalog: Catalog,
    /// Id of the problem on screen
    day: u32,
    language: Language,
    /// Authoritative code buffer
    code: String,
    /// Where the last change to `code` came from
    last_origin: ChangeOrigin,
    /// Editor for the current (day, language) pairing
    editor: CodeEditor,
    pub console: ConsoleState,
    /// "Copied" confirmation is showing
    pub copied: bool,
}

impl AppModel {
    /// Start on the first problem with its starter code for `language`
    pub fn new(catalog: Catalog, language: Language) -> Self {
        let first = catalog.first();
        let day = first.id;
        let code = first.starter(language).to_string();
        let editor = CodeEditor::new(&code);
        Self {
            catalog,
            day,
            language,
            code,
            last_origin: ChangeOrigin::ExternalReset,
            editor,
            console: ConsoleState::default(),
            copied: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn total_days(&self) -> usize {
        self.catalog.len()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn editor(&self) -> &CodeEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut CodeEditor {
        &mut self.editor
    }

    /// Problem on screen (the first one if the day is unknown)
    pub fn problem(&self) -> &Problem {
        self.catalog.find_or_first(self.day)
    }

    pub fn starter_code(&self) -> &str {
        self.problem().starter(self.language)
    }

    pub fn has_previous_day(&self) -> bool {
        self.catalog.previous_id(self.day).is_some()
    }

    pub fn has_next_day(&self) -> bool {
        self.catalog.next_id(self.day).is_some()
    }

    /// Move to another (day, language) pairing: starter code, no result,
    /// console closed and a brand new editor.
    ///
    /// Returns false when the pairing is unchanged.
    pub fn switch_pairing(&mut self, day: u32, language: Language) -> bool {
        let day = self.catalog.find_or_first(day).id;
        if day == self.day && language == self.language {
            return false;
        }
        self.day = day;
        self.language = language;
        self.code = self.starter_code().to_string();
        self.last_origin = ChangeOrigin::ExternalReset;
        self.editor = CodeEditor::new(&self.code);
        self.console.clear();
        tracing::info!(day, %language, "Switched problem");
        true
    }

    /// Apply a change produced by the editor
    pub fn apply_change(&mut self, text: String, origin: ChangeOrigin) {
        self.code = text;
        self.last_origin = origin;
        self.editor.sync(&self.code, origin);
    }

    /// Replace the code from outside the editor and fold it into history
    pub fn replace_code_externally(&mut self, text: String) {
        self.code = text;
        self.last_origin = ChangeOrigin::ExternalReset;
        self.editor.sync(&self.code, self.last_origin);
    }

    /// Render the editor for the current buffer
    pub fn editor_view(&mut self, highlighter: Option<&mut dyn Highlighter>) -> EditorView {
        self.editor
            .render(&self.code, self.language, self.last_origin, highlighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AppModel {
        AppModel::new(Catalog::builtin().unwrap(), Language::Java)
    }

    #[test]
    fn test_starts_on_first_problem() {
        let model = model();
        assert_eq!(model.day(), 1);
        assert_eq!(model.code(), model.problem().starter(Language::Java));
        assert!(!model.has_previous_day());
        assert!(model.has_next_day());
        assert!(!model.console.open);
    }

    #[test]
    fn test_switch_unknown_day_falls_back() {
        let mut model = model();
        assert!(model.switch_pairing(3, Language::Java));
        assert!(model.switch_pairing(42, Language::Java));
        assert_eq!(model.day(), 1);
    }

    #[test]
    fn test_switch_same_pairing_is_noop() {
        let mut model = model();
        model.apply_change("edited".into(), ChangeOrigin::UserEdit);
        assert!(!model.switch_pairing(1, Language::Java));
        assert_eq!(model.code(), "edited");
    }

    #[test]
    fn test_switch_discards_history() {
        let mut model = model();
        model.replace_code_externally("loaded".into());
        assert!(model.editor().engine().can_undo());

        model.switch_pairing(1, Language::Python);
        assert!(!model.editor().engine().can_undo());
        assert!(model.code().starts_with("class Solution:"));
    }
}
