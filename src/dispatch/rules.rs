use crate::actions::CopyAction;
use crate::charset::EncodeError;
use crate::keymap::ActionId;
use crate::keys::{KeyCode, KeyEvent, Keystroke, Modifiers};
use crate::term::SCROLL_TO_END;
use crate::writer::WriteRequest;

use super::{Decision, DispatchError, InputDispatcher};

impl InputDispatcher {
    /// Ordered rule evaluation; the first terminating rule decides the
    /// event's fate.
    pub(super) fn decide(&mut self, event: &KeyEvent) -> Result<Decision, DispatchError> {
        if event.is_consumed() {
            return Ok(Decision::Pass);
        }

        self.dismiss_overlays(event);

        let keystroke = Keystroke::from_event(event);
        let bound = self.keymap.action_ids(&keystroke);

        if let Some(decision) = self.run_local_action(&keystroke, event)? {
            return Ok(decision);
        }

        // Non-terminating: keys with an empty encoding must still reach
        // the rules below.
        let named = self.transmit_named(event)?;

        if let Some(decision) = self.swallow_host_reserved(event) {
            return Ok(decision);
        }
        if let Some(decision) = self.send_meta_escape(event)? {
            return Ok(decision);
        }
        if let Some(decision) = self.defer_global_shortcut(event, &bound) {
            return Ok(decision);
        }
        if let Some(decision) = self.send_control_char(event, named.is_empty())? {
            return Ok(decision);
        }

        Ok(if named.is_empty() {
            Decision::Pass
        } else {
            Decision::NamedKey
        })
    }

    /// Escape dismisses transient overlays without deciding the event.
    fn dismiss_overlays(&mut self, event: &KeyEvent) {
        if event.code == KeyCode::Escape {
            self.overlays.dismiss_transient();
        }
    }

    /// The first local action accepting the keystroke wins the event.
    fn run_local_action(
        &mut self,
        keystroke: &Keystroke,
        event: &KeyEvent,
    ) -> Result<Option<Decision>, DispatchError> {
        let Some(index) = self
            .actions
            .iter()
            .position(|action| action.test(keystroke, event))
        else {
            return Ok(None);
        };

        self.actions[index].invoke(event)?;
        event.consume();
        Ok(Some(Decision::Action))
    }

    /// Transmits the encoder's named-key sequence when there is one, and
    /// hands the encoding back for the fallback rule's emptiness check.
    fn transmit_named(&mut self, event: &KeyEvent) -> Result<String, DispatchError> {
        let named = self.encoder.encode(event)?;
        if !named.is_empty() {
            self.transmit(&named)?;
            self.selection.clear_selection();
            self.scrolling.scroll_to(SCROLL_TO_END);
            event.consume();
        }
        Ok(named)
    }

    /// Ctrl+Tab cycles window focus on Windows; leave it to the host.
    fn swallow_host_reserved(&self, event: &KeyEvent) -> Option<Decision> {
        if self.platform.is_windows()
            && event.code == KeyCode::Tab
            && event.modifiers.is_control_only()
        {
            return Some(Decision::HostReserved);
        }
        None
    }

    /// Alt-modified characters become ESC plus the key's base character,
    /// uppercased when Shift is held. Shells expect the exact case.
    fn send_meta_escape(&mut self, event: &KeyEvent) -> Result<Option<Decision>, DispatchError> {
        if !event.modifiers.is_alt_meta() || event.ch.is_none() {
            return Ok(None);
        }
        let Some(base) = event.code.base_char() else {
            return Ok(None);
        };

        let folded = if event.modifiers.contains(Modifiers::SHIFT) {
            base.to_ascii_uppercase()
        } else {
            base
        };
        let mut sequence = String::with_capacity(2);
        sequence.push('\x1b');
        sequence.push(folded);

        self.transmit(&sequence)?;
        self.selection.clear_selection();
        self.scrolling.scroll_to(SCROLL_TO_END);
        event.consume();
        Ok(Some(Decision::MetaEscape))
    }

    /// Modified keystrokes with global bindings belong to the host's
    /// shortcut dispatch. A lone copy binding without a selection falls
    /// through, so its control character still reaches the session.
    fn defer_global_shortcut(&self, event: &KeyEvent, bound: &[ActionId]) -> Option<Decision> {
        if event.modifiers.is_empty() || bound.is_empty() {
            return None;
        }

        let copy_without_selection = bound.len() == 1
            && bound[0].as_str() == CopyAction::ID
            && !self.selection.has_selection();
        if copy_without_selection {
            return None;
        }

        Some(Decision::GlobalShortcut)
    }

    /// Fallback: a control character goes to the session as-is, unless the
    /// named-key rule already transmitted for this keystroke.
    fn send_control_char(
        &mut self,
        event: &KeyEvent,
        nothing_sent: bool,
    ) -> Result<Option<Decision>, DispatchError> {
        let Some(effective) = Self::effective_char(event) else {
            return Ok(None);
        };
        if !effective.is_control() || !nothing_sent {
            return Ok(None);
        }

        self.selection.clear_selection();
        self.transmit_char(effective)?;
        event.consume();
        self.scrolling.scroll_to(SCROLL_TO_END);
        Ok(Some(Decision::ControlChar))
    }

    /// Control characters pass through untouched; control-only open
    /// bracket maps to ESC, whatever character the layout reports.
    fn effective_char(event: &KeyEvent) -> Option<char> {
        if let Some(ch) = event.ch {
            if ch.is_control() {
                return Some(ch);
            }
        }
        if event.modifiers.is_control_only() && event.code == KeyCode::BracketLeft {
            return Some('\x1b');
        }
        event.ch
    }

    fn transmit(&mut self, text: &str) -> Result<(), EncodeError> {
        let bytes = self.writer.charset().encode(text)?;
        self.writer.write(WriteRequest::from_bytes(bytes));
        Ok(())
    }

    fn transmit_char(&mut self, ch: char) -> Result<(), EncodeError> {
        let bytes = self.writer.charset().encode_char(ch)?;
        self.writer.write(WriteRequest::from_bytes(bytes));
        Ok(())
    }
}
