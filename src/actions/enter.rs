//! Return and Shift-Return dispatch.

use crate::host::{Element, HostCommand, ItemContext, OutlineHost, TableRow};

use super::split_at_col;

/// Context-sensitive Return.
///
/// Priority order: line break, link, inline task, list item, heading, table
/// field, plain newline. `force_plain` (a universal prefix argument)
/// bypasses everything.
pub fn smart_return<H: OutlineHost>(host: &mut H, force_plain: bool) {
    if force_plain {
        host.execute(HostCommand::Newline);
        return;
    }

    let point = host.point();
    let bol = host.line_start();
    let eol = host.line_end();
    let element = host.element_at_point();

    match element {
        Element::LineBreak => {
            host.execute(HostCommand::NewlineAndIndent);
        }
        Element::Link if point < eol => {
            host.execute(HostCommand::OpenLink);
        }
        Element::InlineTask => {
            host.execute(HostCommand::Newline);
        }
        Element::Item(item) if point != bol => {
            return_on_item(host, &item, point, bol, eol);
        }
        Element::Heading(heading) => {
            if heading.title.is_empty() {
                // Bare stars: remove the line's text instead of extending it.
                tracing::debug!(rule = "emptyHeading", "smart return");
                host.delete_range(bol, eol);
            } else if point == eol {
                host.execute(HostCommand::InsertHeading);
            } else {
                host.execute(HostCommand::Newline);
            }
        }
        Element::TableField(_) => {
            if current_data_row_is_blank(host) {
                // Collapse the empty row into a fresh line.
                tracing::debug!(rule = "emptyTableRow", "smart return");
                host.delete_range(bol, eol);
            }
            host.execute(HostCommand::Newline);
        }
        _ => {
            host.execute(HostCommand::Newline);
        }
    }
}

fn return_on_item<H: OutlineHost>(
    host: &mut H,
    item: &ItemContext,
    point: usize,
    bol: usize,
    eol: usize,
) {
    let line = host.line_text();
    let bullet_col = item.bullet.end.saturating_sub(bol);
    let (_, rest) = split_at_col(&line, bullet_col);

    if rest.trim().is_empty() {
        // Empty bullet: pressing Return removes it rather than adding another.
        tracing::debug!(rule = "emptyItem", "smart return");
        host.delete_range(bol, eol);
    } else if point == eol && item.checkbox.is_some() {
        host.execute(HostCommand::InsertTodoItem);
    } else if point == eol {
        host.execute(HostCommand::InsertItem);
    } else {
        host.execute(HostCommand::Newline);
    }
}

/// Whether every cell of the current data row is blank.
///
/// The data-row index is applied as a raw index into the separator-filtered
/// row list, matching the behavior this replaces; see DESIGN.md.
fn current_data_row_is_blank<H: OutlineHost>(host: &H) -> bool {
    let rows: Vec<TableRow> = host
        .table_rows()
        .into_iter()
        .filter(|row| !row.separator)
        .collect();
    let index = host.table_row_index();
    match rows.get(index.saturating_sub(1)) {
        Some(row) => row.is_blank(),
        None => false,
    }
}

/// Context-sensitive Shift-Return: copy the table row downward inside a
/// table, otherwise insert a newline preserving indentation.
pub fn smart_shift_return<H: OutlineHost>(host: &mut H, count: usize) {
    match host.element_at_point() {
        Element::TableField(_) | Element::Table => {
            host.execute(HostCommand::CopyTableRowDown(count));
        }
        _ => {
            host.execute(HostCommand::NewlineAndIndent);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/actions/enter.rs"]
mod tests;
