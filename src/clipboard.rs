//! Clipboard access for copying outbound links (news articles, scheduling).

use arboard::Clipboard;

/// Lazily opened system clipboard.
///
/// Opening can fail on headless sessions; the failure is reported on each
/// copy attempt rather than at startup.
#[derive(Default)]
pub struct ClipboardHandler {
    clipboard: Option<Clipboard>,
}

impl ClipboardHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
            self.clipboard = Some(clipboard);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| format!("Failed to set clipboard text: {}", e)),
            None => Err("Clipboard unavailable".to_string()),
        }
    }
}
