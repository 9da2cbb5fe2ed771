use crate::clipboard::Clipboard;
use crate::keys::KeyEvent;

/// Where the copy action reads the active selection from.
pub trait CopySource {
    fn has_selection(&self) -> bool;

    /// Text the current selection renders to. The selection model decides
    /// what multi-line or rectangular selections yield.
    fn selected_text(&self) -> anyhow::Result<String>;
}

/// Copies the terminal selection to the system clipboard.
///
/// Without a selection this is a no-op that leaves the event and any
/// existing clipboard content untouched. A selection that renders to an
/// empty string clears the clipboard instead of leaving stale content
/// behind.
pub struct CopyAction {
    clipboard: Box<dyn Clipboard>,
}

impl CopyAction {
    /// Identifier the keymap binds copy shortcuts to.
    pub const ID: &'static str = "terminal.copy";

    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self { clipboard }
    }

    pub fn perform(&mut self, source: &dyn CopySource, event: &KeyEvent) -> anyhow::Result<()> {
        if !source.has_selection() {
            return Ok(());
        }

        event.consume();
        let text = source.selected_text()?;
        if text.is_empty() {
            self.clipboard.clear()?;
            return Ok(());
        }

        self.clipboard.set_text(&text)?;
        log::trace!("copy to clipboard: {text}");
        Ok(())
    }
}
