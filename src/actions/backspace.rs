//! Backspace dispatch.

use crate::host::{Element, HostCommand, OutlineHost};

use super::split_at_col;

/// Context-sensitive Backspace.
///
/// At a bullet or checkbox boundary the marker is removed (or the item
/// outdented when nested); just after leading heading stars the heading is
/// demoted or promoted. Everywhere else, plain single-char deletion.
/// `force_plain` (an explicit prefix count) bypasses everything and deletes
/// `count` characters.
pub fn smart_backspace<H: OutlineHost>(host: &mut H, count: usize, force_plain: bool) {
    if force_plain {
        host.execute(HostCommand::DeleteBackward(count));
        return;
    }

    let point = host.point();
    match host.element_at_point() {
        Element::Item(item) => {
            if at_marker_end(point, item.bullet.end) {
                if item.nested {
                    // Nested item: reduce depth instead of eating the bullet.
                    tracing::debug!(rule = "outdentItem", "smart backspace");
                    host.execute(HostCommand::Promote);
                } else {
                    tracing::debug!(rule = "dropBullet", "smart backspace");
                    host.delete_range(item.bullet.start, item.bullet.end);
                }
            } else if let Some(checkbox) = item
                .checkbox
                .filter(|checkbox| at_marker_end(point, checkbox.end))
            {
                tracing::debug!(rule = "dropCheckbox", "smart backspace");
                host.delete_range(checkbox.start, checkbox.end);
            } else {
                host.execute(HostCommand::DeleteBackward(1));
            }
        }
        Element::Heading(_) => {
            let col = point.saturating_sub(host.line_start());
            let line = host.line_text();
            let (before, _) = split_at_col(&line, col);
            if before == "* " {
                // Bare top-level marker: strip the markup entirely.
                tracing::debug!(rule = "headingToText", "smart backspace");
                host.execute(HostCommand::HeadingToText);
            } else if is_deep_star_prefix(before) {
                tracing::debug!(rule = "promoteHeading", "smart backspace");
                host.execute(HostCommand::Promote);
            } else {
                host.execute(HostCommand::DeleteBackward(1));
            }
        }
        _ => {
            host.execute(HostCommand::DeleteBackward(1));
        }
    }
}

/// Point sits at, or one past, the end of a marker span.
fn at_marker_end(point: usize, marker_end: usize) -> bool {
    point == marker_end || point == marker_end + 1
}

/// Two or more stars plus a single space, spanning the whole prefix.
fn is_deep_star_prefix(before: &str) -> bool {
    let stars = before.chars().take_while(|&ch| ch == '*').count();
    stars >= 2 && before.len() == stars + 1 && before.ends_with(' ')
}

#[cfg(test)]
#[path = "../../tests/unit/actions/backspace.rs"]
mod tests;
