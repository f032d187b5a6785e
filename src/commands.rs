//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::time::Duration;

use crate::evaluation::EvaluationRequest;

/// How long the "copied" confirmation stays visible
pub const COPY_CONFIRMATION: Duration = Duration::from_millis(2000);

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Evaluate a code snapshot in the background.
    /// Sends `ConsoleMsg::EvaluationFinished` when done
    Evaluate {
        run_id: u64,
        request: EvaluationRequest,
    },
    /// Copy the code, reporting back with `CodeMsg::CopyFinished`
    CopyToClipboard(String),
    /// Put cut text on the clipboard; failures are only logged
    SetClipboard(String),
    /// Send `CodeMsg::CopyConfirmationExpired` after a delay
    ClearCopiedAfter(Duration),
}

impl Cmd {
    /// Name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::Evaluate { .. } => "Evaluate",
            Cmd::CopyToClipboard(_) => "CopyToClipboard",
            Cmd::SetClipboard(_) => "SetClipboard",
            Cmd::ClearCopiedAfter(_) => "ClearCopiedAfter",
        }
    }
}
