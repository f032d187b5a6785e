//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod code;
mod console;
mod editor;
mod navigation;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use code::update_code;
pub use console::update_console;
pub use editor::update_editor;
pub use navigation::update_navigation;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let result = match msg {
        Msg::Editor(m) => update_editor(model, m),
        Msg::Navigation(m) => update_navigation(model, m),
        Msg::Console(m) => update_console(model, m),
        Msg::Code(m) => update_code(model, m),
    };

    if let Some(cmd) = &result {
        debug!(target: "message", cmd = cmd.name(), "command");
    }
    result
}

/// Short message name for log output
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Navigation(m) => format!("Navigation::{:?}", m),
        Msg::Console(m) => match m {
            crate::messages::ConsoleMsg::EvaluationFinished { run_id, .. } => {
                format!("Console::EvaluationFinished({})", run_id)
            }
            other => format!("Console::{:?}", other),
        },
        Msg::Code(m) => match m {
            crate::messages::CodeMsg::Load(text) => format!("Code::Load({} chars)", text.len()),
            other => format!("Code::{:?}", other),
        },
    }
}
