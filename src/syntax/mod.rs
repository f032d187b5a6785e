//! Syntax highlighting module
//!
//! Provides tree-sitter based syntax highlighting with:
//! - The fixed set of solution languages
//! - A [`Highlighter`] capability (tree-sitter backed by default)
//! - Markup rendering with a plain escaped fallback
//!
//! ## Architecture
//!
//! ```text
//! (buffer, language) → Highlighter::highlight → spans
//!                    → flatten_spans → render_markup → markup (cached by the editor)
//! ```
//!
//! ## Supported Languages
//!
//! - Python
//! - Java
//! - C++
//! - C

mod highlights;
mod languages;
mod markup;
mod parser;

pub use highlights::{
    flatten_spans, highlight_id_for_name, HighlightId, HighlightSpan, HIGHLIGHT_NAMES,
};
pub use languages::Language;
pub use markup::{escape_text, plain_markup, render_markup, LINE_BREAK_SENTINEL};
pub use parser::{Highlighter, TreeSitterHighlighter};
