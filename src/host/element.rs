//! Structural classification of the element under the cursor.
//!
//! The host engine owns the outline format; it reports what sits at point as
//! an [`Element`] for the duration of one key-press handler invocation. The
//! dispatcher only reads these views, it never parses document text itself.

/// A half-open char-offset range into the document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Classification of the element at point, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// An explicit line-break element (e.g. a trailing `\\`).
    LineBreak,
    /// A link; whether point is at end-of-line is a separate position query.
    Link,
    /// An inline task line.
    InlineTask,
    /// A list item (plain or checkbox).
    Item(ItemContext),
    /// A heading line.
    Heading(HeadingContext),
    /// A data field inside a table.
    TableField(TableFieldContext),
    /// Inside a table but not on a data field (separator or frame).
    Table,
    /// Ordinary text, or anything the host could not classify further.
    Text,
}

/// Structural attributes of the list item at point.
///
/// `bullet` covers the bullet marker text including its trailing space
/// (`"- "`, `"3. "`); `checkbox` likewise covers `"[ ] "` when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemContext {
    pub bullet: Span,
    pub checkbox: Option<Span>,
    /// True when the item's structural grandparent is itself a list item,
    /// i.e. the item is nested inside another item.
    pub nested: bool,
}

/// Structural attributes of the heading at point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingContext {
    pub level: u8,
    /// Title text after the stars, without the separating space.
    pub title: String,
}

/// Structural attributes of the table field at point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFieldContext {
    /// Data-row index of the field, 1-based, separator rows not counted.
    pub row: usize,
    pub column: usize,
    pub empty: bool,
}

/// One table row in the host's row-major table snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Horizontal separator rows carry no cells worth inspecting.
    pub separator: bool,
    pub cells: Vec<String>,
}

impl TableRow {
    pub fn data<S: Into<String>>(cells: Vec<S>) -> Self {
        Self {
            separator: false,
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn separator() -> Self {
        Self {
            separator: true,
            cells: Vec::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.trim().is_empty())
    }
}
