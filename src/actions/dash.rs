//! `-` dispatch.

use crate::host::{Element, HostCommand, OutlineHost};

use super::split_at_col;

/// Context-sensitive `-`.
///
/// Typed at the start of an empty heading's title it converts the heading
/// into a list item and leaves point at end of line; anywhere else it is a
/// literal self-insert repeated `count` times.
pub fn smart_dash<H: OutlineHost>(host: &mut H, count: usize) {
    if let Element::Heading(heading) = host.element_at_point() {
        if heading.title.is_empty() && at_title_start(host) {
            tracing::debug!(rule = "headingToItem", "smart dash");
            host.execute(HostCommand::HeadingToItem);
            let eol = host.line_end();
            host.set_point(eol);
            return;
        }
    }
    host.execute(HostCommand::SelfInsert('-', count));
}

/// Point immediately follows the heading's stars and separating space.
fn at_title_start<H: OutlineHost>(host: &H) -> bool {
    let col = host.point().saturating_sub(host.line_start());
    let line = host.line_text();
    let (before, _) = split_at_col(&line, col);
    let stars = before.chars().take_while(|&ch| ch == '*').count();
    stars >= 1 && before.len() == stars + 1 && before.ends_with(' ')
}

#[cfg(test)]
#[path = "../../tests/unit/actions/dash.rs"]
mod tests;
