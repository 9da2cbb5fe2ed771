mod code;
mod event;
mod keystroke;
mod modifiers;

pub use code::KeyCode;
pub use event::KeyEvent;
pub use keystroke::Keystroke;
pub use modifiers::Modifiers;
