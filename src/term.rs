use crate::keys::KeyEvent;

/// Scroll offset meaning "newest output".
pub const SCROLL_TO_END: usize = usize::MAX;

/// Text selection state owned by the terminal.
pub trait SelectionModel {
    fn has_selection(&self) -> bool;

    fn clear_selection(&mut self);
}

/// Viewport scroll position owned by the terminal.
pub trait ScrollingModel {
    /// Scrolls the view; `SCROLL_TO_END` pins it to the newest output.
    fn scroll_to(&mut self, offset: usize);
}

/// Transient on-screen overlays (toasts, hints) dismissed on Escape.
pub trait OverlayModel {
    fn dismiss_transient(&mut self);
}

/// Protocol encoding table for named keys (arrows, function keys, Home,
/// End, ...). The table itself lives outside this crate.
pub trait KeyEncoder {
    /// Control sequence for the event, or an empty string when the key has
    /// no protocol-level meaning.
    fn encode(&self, event: &KeyEvent) -> anyhow::Result<String>;
}
