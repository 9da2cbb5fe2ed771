use serde::{Deserialize, Serialize};

use super::{KeyCode, KeyEvent, Modifiers};

/// Normalized key code plus modifier set, used for shortcut matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keystroke {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl Keystroke {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}
