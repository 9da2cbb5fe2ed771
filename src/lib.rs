//! Keyboard dispatch and byte encoding for an interactive terminal session.
//!
//! The crate sits between a display surface and a PTY-style session. It
//! consumes raw key-press / key-typed events, walks an ordered rule set to
//! decide between shortcut routing, named-key protocol encoding, Alt
//! escaping and plain character transmission, and writes the resulting
//! bytes through a non-blocking session writer, clearing the selection and
//! scrolling to the newest output alongside every transmission.
//!
//! The terminal itself (grid, rendering, scrollback, the named-key table)
//! stays outside, reached through the narrow collaborator traits
//! ([`SelectionModel`], [`ScrollingModel`], [`KeyEncoder`], [`KeymapLookup`]).

mod actions;
mod charset;
mod clipboard;
mod dispatch;
mod keymap;
mod keys;
mod platform;
mod session;
mod term;
mod writer;

pub use actions::{CopyAction, CopySource, TerminalAction};
pub use charset::{Charset, EncodeError};
pub use clipboard::{Clipboard, SystemClipboard};
pub use dispatch::{Decision, DispatchError, InputDispatcher};
pub use keymap::{ActionId, Keymap, KeymapLookup, load_keymap, save_keymap};
pub use keys::{KeyCode, KeyEvent, Keystroke, Modifiers};
pub use platform::Platform;
pub use session::{Session, SessionWriter, default_shell};
pub use term::{KeyEncoder, OverlayModel, SCROLL_TO_END, ScrollingModel, SelectionModel};
pub use writer::{TerminalWriter, WriteRequest};
