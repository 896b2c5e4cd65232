//! Host capability interface.
//!
//! All structural intelligence lives in the host editing engine: it parses
//! the outline format, tracks the cursor, and implements every document
//! command. This module defines the seam the dispatcher talks through:
//! read-only position/structure queries, one direct mutation (range
//! deletion), and a single delegation entry point taking a semantic
//! [`HostCommand`].

mod element;
pub mod scripted;

pub use element::{Element, HeadingContext, ItemContext, Span, TableFieldContext, TableRow};

/// A command delegated verbatim to the host engine.
///
/// The dispatcher never implements these; their semantics, including failure
/// behavior, are inherited from the host unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Plain newline insertion.
    Newline,
    /// Newline preserving the current indentation.
    NewlineAndIndent,
    /// Open the link at point.
    OpenLink,
    /// Insert a new heading at the appropriate level (meta-return).
    InsertHeading,
    /// Insert a new list item at the appropriate level (meta-return).
    InsertItem,
    /// Insert a new todo/checkbox item.
    InsertTodoItem,
    /// Copy the current table row downward `count` times.
    CopyTableRowDown(usize),
    /// Reduce nesting depth by one (item outdent or heading promote).
    Promote,
    /// Strip heading markup, leaving plain text.
    HeadingToText,
    /// Convert the heading at point into a list item.
    HeadingToItem,
    /// Plain backward deletion of `count` characters.
    DeleteBackward(usize),
    /// Plain self-insertion of a character, repeated `count` times.
    SelfInsert(char, usize),
}

impl HostCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::Newline => "newline",
            HostCommand::NewlineAndIndent => "newlineAndIndent",
            HostCommand::OpenLink => "openLink",
            HostCommand::InsertHeading => "insertHeading",
            HostCommand::InsertItem => "insertItem",
            HostCommand::InsertTodoItem => "insertTodoItem",
            HostCommand::CopyTableRowDown(_) => "copyTableRowDown",
            HostCommand::Promote => "promote",
            HostCommand::HeadingToText => "headingToText",
            HostCommand::HeadingToItem => "headingToItem",
            HostCommand::DeleteBackward(_) => "deleteBackward",
            HostCommand::SelfInsert(..) => "selfInsert",
        }
    }

    /// Commands that mutate the buffer, as opposed to `OpenLink`.
    pub fn is_edit_command(&self) -> bool {
        !matches!(self, HostCommand::OpenLink)
    }
}

/// Capabilities the dispatcher requires from the host editing engine.
///
/// Offsets are char offsets into the document buffer. All query methods are
/// read-only snapshots valid for one handler invocation; `delete_range` is
/// the only mutation the dispatcher performs directly.
pub trait OutlineHost {
    /// Current cursor offset.
    fn point(&self) -> usize;

    /// Offset of the beginning of the current line.
    fn line_start(&self) -> usize;

    /// Offset of the end of the current line (before the newline).
    fn line_end(&self) -> usize;

    /// Text of the current line, without the trailing newline.
    fn line_text(&self) -> String;

    /// Classify the element at point.
    fn element_at_point(&self) -> Element;

    /// Row-major snapshot of the table at point, separator rows marked.
    ///
    /// Only meaningful when `element_at_point` reported a table context.
    fn table_rows(&self) -> Vec<TableRow>;

    /// Current data-row index, 1-based, separator rows not counted.
    fn table_row_index(&self) -> usize;

    /// Delete the char range `start..end` from the buffer.
    fn delete_range(&mut self, start: usize, end: usize);

    /// Move the cursor to `offset`.
    fn set_point(&mut self, offset: usize);

    /// Delegate a command to the host, inheriting its semantics unchanged.
    fn execute(&mut self, command: HostCommand);
}
