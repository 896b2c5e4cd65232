//! Key-binding table: key chord → smart action mapping.
//!
//! The table is built once when the mode is created and read-only
//! afterwards; rebinding is supported for embedders with different
//! terminal encodings.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};

/// A key chord (key code plus modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// The four logical actions the mode rebinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmartKey {
    Return,
    ShiftReturn,
    Backspace,
    Dash,
}

impl SmartKey {
    pub fn name(&self) -> &'static str {
        match self {
            SmartKey::Return => "smartReturn",
            SmartKey::ShiftReturn => "smartShiftReturn",
            SmartKey::Backspace => "smartBackspace",
            SmartKey::Dash => "smartDash",
        }
    }
}

/// Key → action mapping.
pub struct Keybindings {
    bindings: HashMap<Key, SmartKey>,
}

impl Keybindings {
    /// The default table: Return, Shift-Return (under both encodings
    /// terminals emit for it), Backspace, and `-`.
    pub fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(Key::simple(KeyCode::Enter), SmartKey::Return);
        bindings.insert(Key::shift(KeyCode::Enter), SmartKey::ShiftReturn);
        bindings.insert(Key::shift(KeyCode::Char('\r')), SmartKey::ShiftReturn);
        bindings.insert(Key::simple(KeyCode::Backspace), SmartKey::Backspace);
        bindings.insert(Key::simple(KeyCode::Char('-')), SmartKey::Dash);

        Self { bindings }
    }

    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn get(&self, key: &Key) -> Option<&SmartKey> {
        self.bindings.get(key)
    }

    pub fn bind(&mut self, key: Key, action: SmartKey) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: &Key) -> Option<SmartKey> {
        self.bindings.remove(key)
    }

    pub fn keys_for_action(&self, action: SmartKey) -> Vec<Key> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect()
    }

    pub fn is_bound(&self, key: &Key) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
