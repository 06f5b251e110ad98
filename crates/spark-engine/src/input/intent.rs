//! Translation of raw host input into semantic intents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::queue::InputEvent;
use crate::api::types::VisualMode;

/// A change the user asked for. Applied to `RuntimeConfig` in queue order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    IncreaseSize,
    DecreaseSize,
    SelectMode(VisualMode),
    PointerMoved { x: f32, y: f32 },
}

/// Actions a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    IncreaseSize,
    DecreaseSize,
    SelectFading,
    SelectColorShift,
}

impl From<KeyAction> for Intent {
    fn from(action: KeyAction) -> Self {
        match action {
            KeyAction::IncreaseSize => Intent::IncreaseSize,
            KeyAction::DecreaseSize => Intent::DecreaseSize,
            KeyAction::SelectFading => Intent::SelectMode(VisualMode::Fading),
            KeyAction::SelectColorShift => Intent::SelectMode(VisualMode::ColorShift),
        }
    }
}

/// Key code → action table. Codes are browser `KeyboardEvent.keyCode` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    bindings: HashMap<u32, KeyAction>,
}

impl KeyBindings {
    pub const KEY_1: u32 = 49;
    pub const KEY_2: u32 = 50;
    pub const KEY_EQUAL: u32 = 187;
    pub const KEY_MINUS: u32 = 189;
    pub const NUMPAD_ADD: u32 = 107;
    pub const NUMPAD_SUBTRACT: u32 = 109;

    /// An empty table: every key is ignored.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(mut self, key_code: u32, action: KeyAction) -> Self {
        self.bindings.insert(key_code, action);
        self
    }

    pub fn action(&self, key_code: u32) -> Option<KeyAction> {
        self.bindings.get(&key_code).copied()
    }

    /// Translate a raw event. Returns `None` for unbound keys and events with no meaning here.
    pub fn translate(&self, event: &InputEvent) -> Option<Intent> {
        match *event {
            InputEvent::PointerMove { x, y } => Some(Intent::PointerMoved { x, y }),
            InputEvent::KeyDown { key_code } => self.action(key_code).map(Intent::from),
            InputEvent::KeyUp { .. } => None,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::empty()
            .bind(Self::KEY_EQUAL, KeyAction::IncreaseSize)
            .bind(Self::NUMPAD_ADD, KeyAction::IncreaseSize)
            .bind(Self::KEY_MINUS, KeyAction::DecreaseSize)
            .bind(Self::NUMPAD_SUBTRACT, KeyAction::DecreaseSize)
            .bind(Self::KEY_1, KeyAction::SelectFading)
            .bind(Self::KEY_2, KeyAction::SelectColorShift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.action(187), Some(KeyAction::IncreaseSize));
        assert_eq!(keys.action(107), Some(KeyAction::IncreaseSize));
        assert_eq!(keys.action(189), Some(KeyAction::DecreaseSize));
        assert_eq!(keys.action(109), Some(KeyAction::DecreaseSize));
        assert_eq!(keys.action(49), Some(KeyAction::SelectFading));
        assert_eq!(keys.action(50), Some(KeyAction::SelectColorShift));
        assert_eq!(keys.action(32), None);
    }

    #[test]
    fn translate_events() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.translate(&InputEvent::KeyDown { key_code: 50 }),
            Some(Intent::SelectMode(VisualMode::ColorShift))
        );
        assert_eq!(
            keys.translate(&InputEvent::PointerMove { x: 1.0, y: 2.0 }),
            Some(Intent::PointerMoved { x: 1.0, y: 2.0 })
        );
        assert_eq!(keys.translate(&InputEvent::KeyUp { key_code: 50 }), None);
        assert_eq!(keys.translate(&InputEvent::KeyDown { key_code: 13 }), None);
    }

    #[test]
    fn bindings_from_json() {
        let keys: KeyBindings = serde_json::from_str(r#"{ "38": "increase_size", "40": "decrease_size" }"#).unwrap();
        assert_eq!(keys.action(38), Some(KeyAction::IncreaseSize));
        assert_eq!(keys.action(40), Some(KeyAction::DecreaseSize));
        assert_eq!(keys.action(187), None);
    }
}
