//! Clipboard access

/// Somewhere to put copied text
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard via `arboard`
///
/// A new handle is opened per write; holding one open keeps clipboard
/// ownership on some platforms.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())
    }
}
