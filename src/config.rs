//! Mode configuration: per-action toggles, loadable from a JSON file.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keymap::SmartKey;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartKeysConfig {
    #[serde(default = "enabled")]
    pub smart_return: bool,
    #[serde(default = "enabled")]
    pub smart_shift_return: bool,
    #[serde(default = "enabled")]
    pub smart_backspace: bool,
    #[serde(default = "enabled")]
    pub smart_dash: bool,
}

fn enabled() -> bool {
    true
}

impl Default for SmartKeysConfig {
    fn default() -> Self {
        Self {
            smart_return: true,
            smart_shift_return: true,
            smart_backspace: true,
            smart_dash: true,
        }
    }
}

impl SmartKeysConfig {
    pub fn is_enabled(&self, action: SmartKey) -> bool {
        match action {
            SmartKey::Return => self.smart_return,
            SmartKey::ShiftReturn => self.smart_shift_return,
            SmartKey::Backspace => self.smart_backspace,
            SmartKey::Dash => self.smart_dash,
        }
    }
}

/// Load a config file; missing or unreadable files yield `None` so callers
/// can fall back to defaults.
pub fn load_config(path: &Path) -> Option<SmartKeysConfig> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Write the config as pretty-printed JSON, creating parent directories.
pub fn save_config(path: &Path, config: &SmartKeysConfig) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(config)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    std::fs::write(path, content)
}
