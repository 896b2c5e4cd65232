use super::*;
use crate::host::scripted::ScriptedHost;
use crate::host::{
    Element, HeadingContext, HostCommand, ItemContext, Span, TableFieldContext, TableRow,
};

fn item(bullet: Span) -> Element {
    Element::Item(ItemContext {
        bullet,
        checkbox: None,
        nested: false,
    })
}

fn checkbox_item(bullet: Span, checkbox: Span) -> Element {
    Element::Item(ItemContext {
        bullet,
        checkbox: Some(checkbox),
        nested: false,
    })
}

fn heading(title: &str) -> Element {
    Element::Heading(HeadingContext {
        level: 1,
        title: title.to_string(),
    })
}

fn table_field() -> Element {
    Element::TableField(TableFieldContext {
        row: 1,
        column: 0,
        empty: false,
    })
}

#[test]
fn force_plain_bypasses_context() {
    let mut host = ScriptedHost::new("- \n")
        .with_point(2)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, true);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
    assert!(host.deletions().is_empty());
}

#[test]
fn line_break_inserts_newline_with_indent() {
    let mut host = ScriptedHost::new("text \\\\\n")
        .with_point(3)
        .with_element(Element::LineBreak);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::NewlineAndIndent]);
}

#[test]
fn link_before_line_end_opens_it() {
    let mut host = ScriptedHost::new("see [[target]] here\n")
        .with_point(7)
        .with_element(Element::Link);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::OpenLink]);
}

#[test]
fn link_at_line_end_is_plain_newline() {
    let mut host = ScriptedHost::new("see [[target]]\n")
        .at_line_end(0)
        .with_element(Element::Link);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
}

#[test]
fn inline_task_is_plain_newline() {
    let mut host = ScriptedHost::new("task line\n")
        .with_point(4)
        .with_element(Element::InlineTask);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
}

#[test]
fn empty_item_deletes_line_text_without_insertion() {
    let mut host = ScriptedHost::new("- \nnext\n")
        .with_point(2)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, false);
    assert_eq!(host.text(), "\nnext\n");
    assert_eq!(host.deletions(), &[(0, 2)]);
    assert!(host.executed().is_empty());
}

#[test]
fn empty_item_with_trailing_spaces_still_deletes() {
    let mut host = ScriptedHost::new("-   \n")
        .at_line_end(0)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, false);
    assert_eq!(host.text(), "\n");
    assert!(host.executed().is_empty());
}

#[test]
fn non_empty_item_at_line_end_inserts_new_item() {
    let mut host = ScriptedHost::new("- milk\n")
        .at_line_end(0)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::InsertItem]);
    assert!(host.deletions().is_empty());
}

#[test]
fn checkbox_item_at_line_end_inserts_todo_item() {
    let mut host = ScriptedHost::new("- [ ] milk\n")
        .at_line_end(0)
        .with_element(checkbox_item(Span::new(0, 2), Span::new(2, 6)));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::InsertTodoItem]);
}

#[test]
fn item_mid_line_is_plain_newline() {
    let mut host = ScriptedHost::new("- milk and eggs\n")
        .with_point(6)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
}

#[test]
fn item_at_line_start_falls_through_to_plain_newline() {
    let mut host = ScriptedHost::new("- milk\n")
        .with_point(0)
        .with_element(item(Span::new(0, 2)));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
    assert!(host.deletions().is_empty());
}

#[test]
fn bare_heading_deletes_line_text() {
    let mut host = ScriptedHost::new("* \nbody\n")
        .with_point(2)
        .with_element(heading(""));
    smart_return(&mut host, false);
    assert_eq!(host.text(), "\nbody\n");
    assert!(host.executed().is_empty());
}

#[test]
fn heading_at_line_end_inserts_new_heading() {
    let mut host = ScriptedHost::new("* Title\n")
        .at_line_end(0)
        .with_element(heading("Title"));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::InsertHeading]);
}

#[test]
fn heading_mid_line_is_plain_newline() {
    let mut host = ScriptedHost::new("* Title\n")
        .with_point(4)
        .with_element(heading("Title"));
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
}

#[test]
fn table_row_with_content_is_plain_newline() {
    let rows = vec![
        TableRow::data(vec!["a", "b"]),
        TableRow::separator(),
        TableRow::data(vec!["", "x"]),
    ];
    let mut host = ScriptedHost::new("| | x |\n")
        .with_point(2)
        .with_element(table_field())
        .with_table(rows, 2);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
    assert!(host.deletions().is_empty());
}

#[test]
fn blank_table_row_is_collapsed_into_fresh_line() {
    let rows = vec![
        TableRow::data(vec!["a", "b"]),
        TableRow::separator(),
        TableRow::data(vec!["", "  "]),
    ];
    let mut host = ScriptedHost::new("|  |  |\n")
        .with_point(2)
        .with_element(table_field())
        .with_table(rows, 2);
    smart_return(&mut host, false);
    assert_eq!(host.deletions(), &[(0, 7)]);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
    assert_eq!(host.text(), "\n\n");
}

#[test]
fn table_index_is_raw_into_filtered_rows() {
    // The data-row index is applied to the separator-filtered list as-is;
    // an index past its end reads as a non-blank row.
    let rows = vec![
        TableRow::data(vec!["x"]),
        TableRow::separator(),
        TableRow::data(vec![""]),
    ];
    let mut host = ScriptedHost::new("|  |\n")
        .with_point(1)
        .with_element(table_field())
        .with_table(rows, 3);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
    assert!(host.deletions().is_empty());
}

#[test]
fn plain_text_is_plain_newline() {
    let mut host = ScriptedHost::new("hello\n").with_point(3);
    smart_return(&mut host, false);
    assert_eq!(host.executed(), &[HostCommand::Newline]);
}

#[test]
fn shift_return_in_table_copies_row_down() {
    let mut host = ScriptedHost::new("| a |\n")
        .with_point(2)
        .with_element(table_field());
    smart_shift_return(&mut host, 1);
    assert_eq!(host.executed(), &[HostCommand::CopyTableRowDown(1)]);
}

#[test]
fn shift_return_on_separator_still_copies() {
    let mut host = ScriptedHost::new("|---|\n")
        .with_point(2)
        .with_element(Element::Table);
    smart_shift_return(&mut host, 2);
    assert_eq!(host.executed(), &[HostCommand::CopyTableRowDown(2)]);
}

#[test]
fn shift_return_outside_table_indents() {
    let mut host = ScriptedHost::new("  text\n").with_point(4);
    smart_shift_return(&mut host, 1);
    assert_eq!(host.executed(), &[HostCommand::NewlineAndIndent]);
}
