//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use codedaily::catalog::Catalog;
use codedaily::clipboard::Clipboard;
use codedaily::editable::{ChangeOrigin, EditorKey, KeyOutcome, Selection, SurfaceEdit};
use codedaily::editor::{CodeEditor, EditorView};
use codedaily::evaluation::{
    EvaluationError, EvaluationRequest, Evaluator, ExecutionResult, ExecutionStatus, TestResult,
};
use codedaily::messages::{EditorMsg, Msg};
use codedaily::model::AppModel;
use codedaily::syntax::Language;
use codedaily::update::update;

// ============================================================================
// Editor host
// ============================================================================

/// Minimal owner of a buffer driving a `CodeEditor` the way a page would:
/// it applies every change it is handed and renders afterwards.
pub struct Host {
    pub value: String,
    pub origin: ChangeOrigin,
    pub editor: CodeEditor,
}

impl Host {
    pub fn new(text: &str) -> Self {
        Self {
            value: text.to_string(),
            origin: ChangeOrigin::ExternalReset,
            editor: CodeEditor::new(text),
        }
    }

    /// Host with the caret at `caret`
    pub fn with_caret(text: &str, caret: usize) -> Self {
        let mut host = Self::new(text);
        host.editor.select(Selection::caret(caret));
        host
    }

    pub fn render(&mut self) -> EditorView {
        self.editor
            .render(&self.value, Language::Java, self.origin, None)
    }

    pub fn caret(&self) -> usize {
        self.editor.selection().head
    }

    /// Press a key, falling back to default insertion for characters
    pub fn key(&mut self, key: EditorKey) -> KeyOutcome {
        let outcome = self.editor.key_down(&self.value, key);
        match (&outcome, key) {
            (KeyOutcome::Replace(change), _) => {
                self.value = change.text.clone();
                self.origin = change.origin;
                self.render();
            }
            (KeyOutcome::PassThrough, EditorKey::Char(ch)) => {
                self.input(SurfaceEdit::InsertText(ch.to_string()));
            }
            _ => {}
        }
        outcome
    }

    pub fn input(&mut self, edit: SurfaceEdit) {
        if let Some(input) = self.editor.input(&self.value, edit) {
            self.value = input.change.text;
            self.origin = input.change.origin;
            self.render();
        }
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let key = match ch {
                '\n' => EditorKey::Enter,
                '\t' => EditorKey::Tab,
                _ => EditorKey::Char(ch),
            };
            self.key(key);
        }
    }

    pub fn undo(&mut self) -> KeyOutcome {
        self.key(EditorKey::Undo)
    }

    pub fn redo(&mut self) -> KeyOutcome {
        self.key(EditorKey::Redo)
    }

    /// Replace the buffer the way navigation or a reset does
    pub fn reset_to(&mut self, text: &str) -> EditorView {
        self.value = text.to_string();
        self.origin = ChangeOrigin::ExternalReset;
        self.render()
    }
}

// ============================================================================
// App model
// ============================================================================

/// Model on the built-in catalog, first problem
pub fn test_model(language: Language) -> AppModel {
    AppModel::new(Catalog::builtin().unwrap(), language)
}

pub fn send(model: &mut AppModel, msg: EditorMsg) {
    update(model, Msg::Editor(msg));
}

pub fn type_into(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        send(model, EditorMsg::Key(EditorKey::Char(ch)));
    }
}

// ============================================================================
// Collaborator fakes
// ============================================================================

/// Evaluator that always answers with the same result
pub struct FixedEvaluator(pub ExecutionResult);

impl Evaluator for FixedEvaluator {
    fn evaluate(&self, _request: &EvaluationRequest) -> Result<ExecutionResult, EvaluationError> {
        Ok(self.0.clone())
    }
}

/// Evaluator that records requests and compares code against a marker
pub struct RecordingEvaluator {
    pub requests: Mutex<Vec<EvaluationRequest>>,
}

impl RecordingEvaluator {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl Evaluator for RecordingEvaluator {
    fn evaluate(&self, request: &EvaluationRequest) -> Result<ExecutionResult, EvaluationError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(all_passed(request))
    }
}

/// Evaluator whose service never answers properly
pub struct UnreachableEvaluator;

impl Evaluator for UnreachableEvaluator {
    fn evaluate(&self, _request: &EvaluationRequest) -> Result<ExecutionResult, EvaluationError> {
        Err(EvaluationError::EmptyResponse)
    }
}

/// A `Pass` result echoing every sample as passed
pub fn all_passed(request: &EvaluationRequest) -> ExecutionResult {
    ExecutionResult {
        status: ExecutionStatus::Pass,
        execution_time: 3.0,
        results: request
            .test_cases
            .iter()
            .map(|tc| TestResult {
                input: tc.input.clone(),
                expected: tc.output.clone(),
                actual: tc.output.clone(),
                passed: true,
            })
            .collect(),
        error_message: None,
    }
}

/// Clipboard whose contents stay visible to the test
#[derive(Clone, Default)]
pub struct SharedClipboard {
    pub contents: Arc<Mutex<Option<String>>>,
    pub fail: bool,
}

impl SharedClipboard {
    pub fn text(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for SharedClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.fail {
            return Err("clipboard access denied".to_string());
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
