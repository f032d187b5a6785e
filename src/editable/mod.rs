//! Text editing engine for the code editor.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer access by char offset
//! - [`StringBuffer`]: `String`-backed buffer
//! - [`Selection`]: caret / selection as a pair of char offsets
//! - [`EditHistory`]: bounded linear snapshot history (capacity [`HISTORY_CAPACITY`])
//! - [`TextSurface`]: default editing applied when the engine lets a key pass through
//! - [`EditableState`]: the engine; smart keys, history, reconciliation with
//!   the owner's buffer, caret restoration
//!
//! # Example
//!
//! ```
//! use codedaily::editable::{EditableState, EditorKey, Selection};
//!
//! let value = "    if (x) {";
//! let mut engine = EditableState::new(value);
//!
//! let change = engine
//!     .handle_key(value, Selection::caret(12), EditorKey::Enter)
//!     .into_change()
//!     .unwrap();
//!
//! assert_eq!(change.text, "    if (x) {\n        ");
//! assert_eq!(change.caret, 21);
//! ```

mod buffer;
mod history;
pub mod indent;
mod keys;
mod selection;
mod state;
mod surface;

// Re-export main types
pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use history::{EditHistory, HistoryEntry, HISTORY_CAPACITY};
pub use keys::{BufferChange, ChangeOrigin, EditorKey, KeyOutcome};
pub use selection::Selection;
pub use state::EditableState;
pub use surface::{SurfaceEdit, SurfaceOutput, TextSurface};
