//! smartkeys - context-sensitive key handling for outline documents
//!
//! Module structure:
//! - host: capability interface to the host editing engine (plus a scripted
//!   test double)
//! - actions: the key-context dispatcher (Return, Shift-Return, Backspace, `-`)
//! - keymap: key chord → action binding table
//! - mode: the toggleable minor mode tying keymap, config and actions together
//! - config: per-action toggles, JSON-loadable
//! - logging: tracing setup

pub mod actions;
pub mod config;
pub mod host;
pub mod keymap;
pub mod logging;
pub mod mode;

pub use config::SmartKeysConfig;
pub use host::{Element, HostCommand, OutlineHost};
pub use keymap::{Key, Keybindings, SmartKey};
pub use mode::SmartKeys;
