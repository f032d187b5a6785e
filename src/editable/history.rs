//! Edit history (undo/redo) for the code editor.
//!
//! History is a linear stack of full-buffer snapshots with an index marking the
//! entry currently shown. Appending discards everything after the index, and
//! the oldest entries fall off once the stack exceeds its capacity.

/// Maximum number of snapshots retained
pub const HISTORY_CAPACITY: usize = 50;

/// A buffer snapshot together with the caret offset at the time it was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
    pub caret: usize,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        Self {
            text: text.into(),
            caret,
        }
    }
}

/// Snapshot history with an index into it.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
    max_size: usize,
}

impl EditHistory {
    /// Start a history holding the initial buffer with the caret at 0
    pub fn new(initial: &str) -> Self {
        Self::with_max_size(initial, HISTORY_CAPACITY)
    }

    /// Start a history with a custom capacity (at least 1)
    pub fn with_max_size(initial: &str, max_size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial, 0)],
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Entry at the current index
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Append a snapshot after the current index.
    ///
    /// Returns false (and leaves the history untouched) when `text` equals the
    /// current snapshot.
    pub fn push(&mut self, text: &str, caret: usize) -> bool {
        if self.current().text == text {
            return false;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry::new(text, caret));

        if self.entries.len() > self.max_size {
            let overflow = self.entries.len() - self.max_size;
            self.entries.drain(..overflow);
        }
        self.index = self.entries.len() - 1;
        true
    }

    /// Step back one entry. None at index 0.
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one entry. None at the newest entry.
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_initial_entry() {
        let history = EditHistory::new("start");
        assert_eq!(history.len(), 1);
        assert_eq!(history.index(), 0);
        assert_eq!(history.current(), &HistoryEntry::new("start", 0));
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_skips_identical_snapshot() {
        let mut history = EditHistory::new("a");
        assert!(!history.push("a", 1));
        assert_eq!(history.len(), 1);

        assert!(history.push("ab", 2));
        assert!(!history.push("ab", 0));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_history_undo_redo() {
        let mut history = EditHistory::new("");
        history.push("a", 1);
        history.push("ab", 2);

        assert_eq!(history.undo().map(|e| e.text.clone()), Some("a".into()));
        assert_eq!(history.undo().map(|e| e.text.clone()), Some("".into()));
        assert!(history.undo().is_none());

        assert_eq!(history.redo().map(|e| e.caret), Some(1));
        assert_eq!(history.redo().map(|e| e.caret), Some(2));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_truncates_redo_future() {
        let mut history = EditHistory::new("");
        history.push("a", 1);
        history.push("ab", 2);
        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.push("x", 1);
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().text, "x");
    }

    #[test]
    fn test_history_max_size() {
        let mut history = EditHistory::with_max_size("0", 3);
        for i in 1..5 {
            history.push(&i.to_string(), i);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.index(), 2);
        assert_eq!(history.entries()[0].text, "2");
    }
}
