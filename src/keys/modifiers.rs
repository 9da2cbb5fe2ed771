use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier keys held while a key event was generated.
    ///
    /// The serde representation is bitflags' human-readable flag string
    /// (for example `"SHIFT | CONTROL"`), which is what keymap files store.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const ALT_GRAPH = 1 << 3;
    }
}

impl Modifiers {
    /// Control held with no Alt, AltGraph or Shift.
    pub fn is_control_only(self) -> bool {
        self.contains(Modifiers::CONTROL)
            && !self.intersects(Modifiers::ALT | Modifiers::ALT_GRAPH | Modifiers::SHIFT)
    }

    /// Alt held with no Control and no AltGraph. Shift may be held; it only
    /// decides the case of the escaped character.
    pub fn is_alt_meta(self) -> bool {
        self.contains(Modifiers::ALT)
            && !self.intersects(Modifiers::CONTROL | Modifiers::ALT_GRAPH)
    }
}
