//! Scripted host: a test double for the dispatcher.
//!
//! Holds real document text in a rope and answers structural queries from
//! fixtures scripted by the test, since classifying outline elements is the
//! live engine's job, not this crate's. Direct mutations (`delete_range`,
//! `set_point`) are applied to the rope; delegated commands are recorded,
//! and the plain text-level ones (newline, backward delete, self-insert) are
//! additionally applied so tests can assert on the resulting buffer.

use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use super::{Element, HostCommand, OutlineHost, TableRow};

pub struct ScriptedHost {
    rope: Rope,
    point: usize,
    element: Element,
    table_rows: Vec<TableRow>,
    table_row_index: usize,
    executed: Vec<HostCommand>,
    deletions: Vec<(usize, usize)>,
}

impl ScriptedHost {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            point: 0,
            element: Element::Text,
            table_rows: Vec::new(),
            table_row_index: 0,
            executed: Vec::new(),
            deletions: Vec::new(),
        }
    }

    pub fn with_point(mut self, point: usize) -> Self {
        self.point = point.min(self.rope.len_chars());
        self
    }

    /// Place the cursor at the end of line `line` (before the newline).
    pub fn at_line_end(mut self, line: usize) -> Self {
        self.point = self.rope.line_to_char(line) + line_len(&self.rope, line);
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_table(mut self, rows: Vec<TableRow>, row_index: usize) -> Self {
        self.table_rows = rows;
        self.table_row_index = row_index;
        self
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn executed(&self) -> &[HostCommand] {
        &self.executed
    }

    pub fn deletions(&self) -> &[(usize, usize)] {
        &self.deletions
    }

    fn current_line(&self) -> usize {
        self.rope.char_to_line(self.point)
    }

    fn apply_plain(&mut self, command: HostCommand) {
        match command {
            HostCommand::Newline => {
                self.rope.insert_char(self.point, '\n');
                self.point += 1;
            }
            HostCommand::DeleteBackward(count) => {
                let keep = graphemes_back(&self.rope, self.point, count);
                self.rope.remove(keep..self.point);
                self.point = keep;
            }
            HostCommand::SelfInsert(ch, count) => {
                for _ in 0..count {
                    self.rope.insert_char(self.point, ch);
                    self.point += 1;
                }
            }
            _ => {}
        }
    }
}

impl OutlineHost for ScriptedHost {
    fn point(&self) -> usize {
        self.point
    }

    fn line_start(&self) -> usize {
        self.rope.line_to_char(self.current_line())
    }

    fn line_end(&self) -> usize {
        let line = self.current_line();
        self.rope.line_to_char(line) + line_len(&self.rope, line)
    }

    fn line_text(&self) -> String {
        let line = self.current_line();
        let start = self.rope.line_to_char(line);
        self.rope.slice(start..start + line_len(&self.rope, line)).to_string()
    }

    fn element_at_point(&self) -> Element {
        self.element.clone()
    }

    fn table_rows(&self) -> Vec<TableRow> {
        self.table_rows.clone()
    }

    fn table_row_index(&self) -> usize {
        self.table_row_index
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.rope.len_chars());
        if start >= end {
            return;
        }
        self.deletions.push((start, end));
        self.rope.remove(start..end);
        if self.point >= end {
            self.point -= end - start;
        } else if self.point > start {
            self.point = start;
        }
    }

    fn set_point(&mut self, offset: usize) {
        self.point = offset.min(self.rope.len_chars());
    }

    fn execute(&mut self, command: HostCommand) {
        tracing::trace!(command = command.name(), "host delegation");
        self.executed.push(command);
        self.apply_plain(command);
    }
}

/// Length of line `line` in chars, excluding the trailing newline.
fn line_len(rope: &Rope, line: usize) -> usize {
    let slice = rope.line(line);
    let mut len = slice.len_chars();
    if len > 0 && slice.char(len - 1) == '\n' {
        len -= 1;
    }
    len
}

/// Char offset reached by stepping `count` graphemes back from `point`.
fn graphemes_back(rope: &Rope, point: usize, count: usize) -> usize {
    let before = rope.slice(..point).to_string();
    let mut boundaries: Vec<usize> = before.grapheme_indices(true).map(|(i, _)| i).collect();
    boundaries.push(before.len());
    let cut = boundaries.len().saturating_sub(1).saturating_sub(count);
    before[..boundaries[cut]].chars().count()
}
