//! Keyboard routing into the text buffer.

use std::time::Instant;

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::Key;

use relief_platform::{classify_key, EditMode, Modifiers};

use super::core::ReliefApp;

/// Name a winit key for the dispatch table. Keys without a logical meaning
/// (dead keys, unidentified keys) still get a name so the press counts.
fn key_name(key: &Key) -> String {
    match key {
        Key::Named(named) => format!("{named:?}"),
        Key::Character(c) => c.to_string(),
        Key::Dead(_) => "Dead".to_string(),
        Key::Unidentified(_) => "Unidentified".to_string(),
    }
}

impl ReliefApp {
    /// Process a winit keyboard event. Releases are ignored.
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }

        self.handle_key(&key_name(&event.logical_key), event.text.as_deref());
    }

    /// Apply one key press to the buffer and schedule a rebuild if it changed.
    pub(super) fn handle_key(&mut self, key_name: &str, text: Option<&str>) {
        let mods = Modifiers {
            ctrl: self.modifiers.control_key(),
            alt: self.modifiers.alt_key(),
            shift: self.modifiers.shift_key(),
            super_key: self.modifiers.super_key(),
        };
        let action = classify_key(key_name, text, mods);
        let outcome = self.text_input.apply(&action);

        if outcome.entered_editing {
            tracing::debug!("Placeholder cleared, editing started");
        }
        if outcome.changed {
            tracing::trace!(
                len = self.text_input.text().len(),
                editing = self.text_input.mode() == EditMode::Editing,
                "Text buffer changed"
            );
            self.on_text_changed(Instant::now());
        }
    }
}
