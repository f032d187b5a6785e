//! CodeDaily - daily coding practice with a smart code editor
//!
//! The editor engine lives in [`editable`] and is wrapped for hosts by
//! [`editor::CodeEditor`]. Application state follows the Elm Architecture:
//! [`messages::Msg`] in, [`update::update`] over [`model::AppModel`],
//! [`commands::Cmd`] out, executed by [`runtime::Runtime`].

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod editor;
pub mod evaluation;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod syntax;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, Problem};
pub use commands::Cmd;
pub use config::AppConfig;
pub use editor::{CodeEditor, EditorView};
pub use messages::Msg;
pub use model::AppModel;
pub use syntax::Language;
