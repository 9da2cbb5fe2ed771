mod copy;

pub use copy::{CopyAction, CopySource};

use crate::keys::{KeyEvent, Keystroke};

/// A handler registered directly on the terminal, consulted before any
/// byte transmission.
///
/// Actions are tried in registration order; the first whose `test` accepts
/// the keystroke handles the event.
pub trait TerminalAction {
    fn test(&self, keystroke: &Keystroke, event: &KeyEvent) -> bool;

    fn invoke(&mut self, event: &KeyEvent) -> anyhow::Result<()>;
}
