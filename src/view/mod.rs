//! View module - text renderings of the application panels
//!
//! Each panel has a small view type derived from the model plus a plain-text
//! renderer used by the command-line host.

pub mod console;
pub mod editor;
pub mod navbar;
pub mod problem;

pub use console::{render_console, ConsoleBadge, ConsoleBody, ConsoleView};
pub use editor::render_editor;
pub use navbar::{render_navbar, NavbarView, APP_TITLE};
pub use problem::render_problem;
