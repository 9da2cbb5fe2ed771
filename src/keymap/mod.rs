mod persistence;

pub use persistence::{load_keymap, save_keymap};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::actions::CopyAction;
use crate::keys::{KeyCode, Keystroke, Modifiers};

/// Identifier of an application-level action a shortcut can bind to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only resolution of a keystroke to its bound action identifiers.
pub trait KeymapLookup {
    /// Action ids bound to the keystroke, empty when unbound.
    fn action_ids(&self, keystroke: &Keystroke) -> Vec<ActionId>;
}

/// Shortcut table mapping keystrokes to action identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    bindings: HashMap<Keystroke, Vec<ActionId>>,
}

impl Keymap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Appends a binding; bindings on the same keystroke keep their
    /// registration order.
    pub fn bind(&mut self, keystroke: Keystroke, action: ActionId) {
        self.bindings.entry(keystroke).or_default().push(action);
    }
}

impl Default for Keymap {
    /// Stock bindings: Ctrl+C and Ctrl+Insert copy from the terminal.
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(
            Keystroke::new(KeyCode::KeyC, Modifiers::CONTROL),
            ActionId::new(CopyAction::ID),
        );
        keymap.bind(
            Keystroke::new(KeyCode::Insert, Modifiers::CONTROL),
            ActionId::new(CopyAction::ID),
        );
        keymap
    }
}

impl KeymapLookup for Keymap {
    fn action_ids(&self, keystroke: &Keystroke) -> Vec<ActionId> {
        self.bindings.get(keystroke).cloned().unwrap_or_default()
    }
}
