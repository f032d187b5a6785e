//! Key and change types exchanged between the editor engine and its owner.

/// A key press delivered to the editor engine before the surface applies its
/// default editing behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Tab,
    Enter,
    /// A printable character
    Char(char),
    /// Ctrl/Cmd+Z
    Undo,
    /// Ctrl/Cmd+Shift+Z
    Redo,
}

impl EditorKey {
    /// Map a key name plus modifiers the way a browser `keydown` reports them
    pub fn from_key_event(key: &str, ctrl_or_cmd: bool, shift: bool) -> Option<Self> {
        if ctrl_or_cmd && key.eq_ignore_ascii_case("z") {
            return Some(if shift { EditorKey::Redo } else { EditorKey::Undo });
        }
        if ctrl_or_cmd {
            return None;
        }
        match key {
            "Tab" => Some(EditorKey::Tab),
            "Enter" => Some(EditorKey::Enter),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(EditorKey::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// Where a buffer replacement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeOrigin {
    /// Typing, paste, cut, delete or one of the smart-editing overrides
    UserEdit,
    /// Undo or redo performed by the engine itself
    HistoryNavigation,
    /// The owner replaced the buffer (problem switch, reset, file load)
    ExternalReset,
}

impl ChangeOrigin {
    /// Whether a change with this origin may be folded into history
    pub fn records_history(&self) -> bool {
        !matches!(self, ChangeOrigin::HistoryNavigation)
    }
}

/// A full-buffer replacement the owner should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferChange {
    pub text: String,
    /// Caret to restore on the next render
    pub caret: usize,
    pub origin: ChangeOrigin,
}

impl BufferChange {
    pub fn new(text: String, caret: usize, origin: ChangeOrigin) -> Self {
        Self {
            text,
            caret,
            origin,
        }
    }
}

/// Result of offering a key to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The engine does not handle this key; the surface's default applies
    PassThrough,
    /// The default is suppressed and nothing changes (undo at the oldest
    /// entry, redo at the newest)
    Suppressed,
    /// The default is suppressed and the buffer is replaced
    Replace(BufferChange),
}

impl KeyOutcome {
    pub fn change(&self) -> Option<&BufferChange> {
        match self {
            KeyOutcome::Replace(change) => Some(change),
            _ => None,
        }
    }

    pub fn into_change(self) -> Option<BufferChange> {
        match self {
            KeyOutcome::Replace(change) => Some(change),
            _ => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, KeyOutcome::PassThrough)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_event() {
        assert_eq!(EditorKey::from_key_event("z", true, false), Some(EditorKey::Undo));
        assert_eq!(EditorKey::from_key_event("Z", true, true), Some(EditorKey::Redo));
        assert_eq!(EditorKey::from_key_event("Tab", false, false), Some(EditorKey::Tab));
        assert_eq!(EditorKey::from_key_event("Enter", false, true), Some(EditorKey::Enter));
        assert_eq!(EditorKey::from_key_event("}", false, true), Some(EditorKey::Char('}')));
        assert_eq!(EditorKey::from_key_event("c", true, false), None);
        assert_eq!(EditorKey::from_key_event("ArrowLeft", false, false), None);
    }

    #[test]
    fn test_records_history() {
        assert!(ChangeOrigin::UserEdit.records_history());
        assert!(ChangeOrigin::ExternalReset.records_history());
        assert!(!ChangeOrigin::HistoryNavigation.records_history());
    }
}
