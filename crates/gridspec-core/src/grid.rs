//! Grid specification model.
//!
//! A grid is written as an ordered list of rows, top to bottom. Each row is
//! either ASCII art (`"x-x x"`) or a `distribute` directive asking for `n`
//! equal cells. The parser turns the written form into [`NormalizedRow`]s
//! which the layout stage consumes.

use std::num::NonZeroU32;

/// A complete grid specification, rows in top-to-bottom order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    pub rows: Vec<RowEntry>,
}

impl GridSpec {
    pub fn new(rows: Vec<RowEntry>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<RowEntry> for GridSpec {
    fn from_iter<I: IntoIterator<Item = RowEntry>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}

/// One row as written in a grid specification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RowEntry {
    /// Raw ASCII-art row over the alphabet `x`, `-`, space.
    Ascii(String),
    /// Request for `n` equal-width cells. Zero is rejected by the normalizer.
    Distribute(u32),
}

impl RowEntry {
    pub fn ascii(text: impl Into<String>) -> Self {
        RowEntry::Ascii(text.into())
    }
}

impl From<&str> for RowEntry {
    fn from(s: &str) -> Self {
        RowEntry::Ascii(s.to_string())
    }
}

/// A cell produced by tokenizing an ASCII row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Unit-columns occupied by the cell.
    pub span: u32,
    /// Spaces immediately before the cell in the row text. Between two
    /// cells the first space only separates them; see
    /// [`ParsedRow::blank_before`].
    pub offset: u32,
}

impl Cell {
    pub fn new(span: u32, offset: u32) -> Self {
        Self { span, offset }
    }
}

/// Cells of one ASCII row, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRow {
    pub cells: Vec<Cell>,
}

impl ParsedRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Blank unit-columns before the cell at `index`.
    ///
    /// Leading spaces of the row are all blank columns. After a cell, one
    /// space is the separator already covered by the previous cell's right
    /// gutter, so `"x-x x"` has no blank column and `"x  x"` has one.
    pub fn blank_before(&self, index: usize) -> u32 {
        match self.cells.get(index) {
            Some(cell) if index == 0 => cell.offset,
            Some(cell) => cell.offset.saturating_sub(1),
            None => 0,
        }
    }

    /// Total unit width: spans plus blank columns.
    pub fn width(&self) -> u32 {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| cell.span + self.blank_before(i))
            .sum()
    }

    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A row after normalization, ready for column resolution and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormalizedRow {
    /// Explicit cells from an ASCII row.
    Parsed(ParsedRow),
    /// `n` equal cells, independent of the grid's column count.
    Distribute(NonZeroU32),
}

impl NormalizedRow {
    /// Number of cells this row renders.
    pub fn cell_count(&self) -> usize {
        match self {
            NormalizedRow::Parsed(row) => row.cells.len(),
            NormalizedRow::Distribute(count) => count.get() as usize,
        }
    }
}
