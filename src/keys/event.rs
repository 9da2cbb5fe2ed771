use std::cell::Cell;

use super::{KeyCode, Modifiers};

/// A key-press event as delivered by the host input system.
///
/// One physical keystroke produces exactly one press event, optionally
/// followed by one typed character. Dispatch runs on the host's event
/// thread, so the consumed flag is a plain `Cell`.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub code: KeyCode,
    /// Resolved character, `None` when the key has no character mapping.
    pub ch: Option<char>,
    pub modifiers: Modifiers,
    consumed: Cell<bool>,
}

impl KeyEvent {
    pub fn new(code: KeyCode, ch: Option<char>, modifiers: Modifiers) -> Self {
        Self {
            code,
            ch,
            modifiers,
            consumed: Cell::new(false),
        }
    }

    /// Marks the event handled; the host then skips its default behavior
    /// for the rest of this keystroke.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
