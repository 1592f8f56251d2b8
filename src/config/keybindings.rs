//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only navigation and quitting are bound. Every other key edits the query.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only the code and modifiers are compared; press/repeat kind and
    /// keyboard state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Quit
        bindings.insert((KeyCode::Enter, KeyModifiers::NONE), KeyAction::Quit);
        bindings.insert((KeyCode::Esc, KeyModifiers::NONE), KeyAction::Quit);
        bindings.insert((KeyCode::Char('c'), KeyModifiers::CONTROL), KeyAction::Quit);

        // Row selection
        bindings.insert((KeyCode::Up, KeyModifiers::NONE), KeyAction::SelectPrevious);
        bindings.insert((KeyCode::Down, KeyModifiers::NONE), KeyAction::SelectNext);

        Self { bindings }
    }
}
