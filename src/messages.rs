//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::{EditorKey, Selection, SurfaceEdit};
use crate::evaluation::ExecutionResult;
use crate::syntax::Language;

/// Editor surface events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Key press offered to the engine before default editing
    Key(EditorKey),
    /// Default editing on the surface (typing, paste, cut, delete)
    Input(SurfaceEdit),
    /// Caret or selection moved (mouse, arrows)
    Select(Selection),
    /// The surface scrolled
    Scroll { top: u32, left: u32 },
}

/// Problem and language navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMsg {
    /// Jump to a day; unknown days fall back to the first problem
    SelectDay(u32),
    PreviousDay,
    NextDay,
    SetLanguage(Language),
}

/// Console panel and run lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleMsg {
    /// Submit the current code for evaluation
    Run,
    /// A run finished (results apply in arrival order)
    EvaluationFinished {
        run_id: u64,
        result: ExecutionResult,
    },
    Open,
    Close,
}

/// Toolbar actions on the code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeMsg {
    /// Restore the starter code
    Reset,
    /// Replace the code from outside the editor (file load)
    Load(String),
    /// Copy the code to the clipboard
    Copy,
    /// Clipboard write finished
    CopyFinished(Result<(), String>),
    /// The "copied" confirmation timed out
    CopyConfirmationExpired,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Editor(EditorMsg),
    Navigation(NavigationMsg),
    Console(ConsoleMsg),
    Code(CodeMsg),
}
