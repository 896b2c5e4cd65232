//! The key-context dispatcher: one entry point per logical key action.
//!
//! Each action classifies the context at point through the [`OutlineHost`]
//! queries and picks exactly one outcome: delegate a [`HostCommand`], delete
//! a range and then delegate, or delete only. Rules are evaluated in a fixed
//! priority order, first match wins; anything unclassifiable falls through
//! to the plain default.

mod backspace;
mod dash;
mod enter;

pub use backspace::smart_backspace;
pub use dash::smart_dash;
pub use enter::{smart_return, smart_shift_return};

/// Split `line` at char column `col`; columns past the end put the whole
/// line on the left.
pub(crate) fn split_at_col(line: &str, col: usize) -> (&str, &str) {
    match line.char_indices().nth(col) {
        Some((idx, _)) => line.split_at(idx),
        None => (line, ""),
    }
}
