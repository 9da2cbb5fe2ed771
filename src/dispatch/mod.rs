mod error;
mod rules;

pub use error::DispatchError;

use crate::actions::TerminalAction;
use crate::keymap::KeymapLookup;
use crate::keys::KeyEvent;
use crate::platform::Platform;
use crate::term::{KeyEncoder, OverlayModel, SCROLL_TO_END, ScrollingModel, SelectionModel};
use crate::writer::{TerminalWriter, WriteRequest};

/// Outcome of dispatching one key-press event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// A locally registered terminal action handled the keystroke.
    Action,
    /// The named-key encoding was transmitted.
    NamedKey,
    /// An ESC-prefixed Alt sequence was transmitted.
    MetaEscape,
    /// A control character was transmitted.
    ControlChar,
    /// Swallowed untransmitted; the key belongs to the host window manager.
    HostReserved,
    /// Left untransmitted and unconsumed for the host's global shortcut
    /// dispatch.
    GlobalShortcut,
    /// No rule matched; the typed path may still transmit a character.
    Pass,
    /// The decision procedure faulted and the keystroke was abandoned.
    Dropped,
}

/// Whether the upcoming key-typed event is delivered or suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypedGate {
    Armed,
    SuppressNextTyped,
}

/// Routes key events between shortcut handling and session transmission.
///
/// Collaborators are injected at construction so the decision rules stay
/// deterministic under test. Everything runs on the host's event thread
/// and never blocks; writes are handed to the writer's queue.
pub struct InputDispatcher {
    writer: Box<dyn TerminalWriter>,
    selection: Box<dyn SelectionModel>,
    scrolling: Box<dyn ScrollingModel>,
    overlays: Box<dyn OverlayModel>,
    encoder: Box<dyn KeyEncoder>,
    keymap: Box<dyn KeymapLookup>,
    actions: Vec<Box<dyn TerminalAction>>,
    platform: Platform,
    gate: TypedGate,
}

impl InputDispatcher {
    pub fn new(
        writer: Box<dyn TerminalWriter>,
        selection: Box<dyn SelectionModel>,
        scrolling: Box<dyn ScrollingModel>,
        overlays: Box<dyn OverlayModel>,
        encoder: Box<dyn KeyEncoder>,
        keymap: Box<dyn KeymapLookup>,
    ) -> Self {
        Self {
            writer,
            selection,
            scrolling,
            overlays,
            encoder,
            keymap,
            actions: Vec::new(),
            platform: Platform::current(),
            gate: TypedGate::Armed,
        }
    }

    /// Overrides the detected host platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Registers a terminal-local action. Actions are tried in
    /// registration order.
    pub fn register_action(&mut self, action: Box<dyn TerminalAction>) {
        self.actions.push(action);
    }

    /// Handles a key-press event and reports the decision reached.
    ///
    /// Faults inside the decision rules are never fatal: they are logged,
    /// the selection is cleared, the view scrolls to the newest output and
    /// the keystroke is abandoned. The dispatcher stays usable for the
    /// next keystroke.
    pub fn on_key_pressed(&mut self, event: &KeyEvent) -> Decision {
        self.gate = TypedGate::Armed;

        let decision = match self.decide(event) {
            Ok(decision) => decision,
            Err(err) => {
                log::error!("key dispatch failed: {err}");
                self.selection.clear_selection();
                self.scrolling.scroll_to(SCROLL_TO_END);
                return Decision::Dropped;
            }
        };

        if event.is_consumed() {
            self.gate = TypedGate::SuppressNextTyped;
        }
        decision
    }

    /// Handles the typed character that follows a key press.
    ///
    /// Typed events carry no reliable modifier state, so control characters
    /// are never accepted here; they arrive through the key-press path
    /// instead. A consumed press suppresses the matching typed character.
    pub fn on_key_typed(&mut self, ch: char) {
        if self.gate == TypedGate::SuppressNextTyped || ch.is_control() {
            return;
        }

        self.selection.clear_selection();
        match self.writer.charset().encode_char(ch) {
            Ok(bytes) => self.writer.write(WriteRequest::from_bytes(bytes)),
            Err(err) => log::error!("typed character dropped: {err}"),
        }
        self.scrolling.scroll_to(SCROLL_TO_END);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dispatch.rs"]
mod tests;
