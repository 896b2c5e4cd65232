//! The minor mode: toggleable key handling over a host engine.

use crossterm::event::KeyEvent;

use crate::actions::{smart_backspace, smart_dash, smart_return, smart_shift_return};
use crate::config::SmartKeysConfig;
use crate::host::OutlineHost;
use crate::keymap::{Key, Keybindings, SmartKey};

/// Context-sensitive key handling for Return, Shift-Return, Backspace and
/// `-`, layered over a host outline engine.
///
/// The mode consumes a key event only when it is enabled, the chord is
/// bound, and the action is not switched off in the config; everything else
/// returns `false` so the embedding editor runs its default handling.
pub struct SmartKeys {
    enabled: bool,
    bindings: Keybindings,
    config: SmartKeysConfig,
}

impl SmartKeys {
    pub fn new() -> Self {
        Self::with_config(SmartKeysConfig::default())
    }

    pub fn with_config(config: SmartKeysConfig) -> Self {
        Self {
            enabled: true,
            bindings: Keybindings::default(),
            config,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn bindings(&self) -> &Keybindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut Keybindings {
        &mut self.bindings
    }

    /// Handle one key event against the host.
    ///
    /// `prefix` is the universal prefix argument: it forces plain behavior
    /// for Return and Backspace and supplies the repeat count for the
    /// counted actions. Returns whether the event was consumed.
    pub fn handle_key<H: OutlineHost>(
        &self,
        event: KeyEvent,
        prefix: Option<usize>,
        host: &mut H,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        let key = Key::new(event.code, event.modifiers);
        let Some(action) = self.bindings.get(&key).copied() else {
            return false;
        };
        if !self.config.is_enabled(action) {
            return false;
        }

        let count = prefix.unwrap_or(1).max(1);
        tracing::debug!(action = action.name(), count, "smart key");
        match action {
            SmartKey::Return => smart_return(host, prefix.is_some()),
            SmartKey::ShiftReturn => smart_shift_return(host, count),
            SmartKey::Backspace => smart_backspace(host, count, prefix.is_some()),
            SmartKey::Dash => smart_dash(host, count),
        }
        true
    }
}

impl Default for SmartKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/unit/mode.rs"]
mod tests;
