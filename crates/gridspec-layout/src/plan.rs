//! Layout plan types handed to the styling stage.

use gridspec_core::Length;

use crate::formula::Formula;

/// One rendered cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutCell {
    /// 1-based position among all cells of the grid, row-major. Targets the
    /// Nth child of the container.
    pub index: usize,
    /// 1-based row the cell belongs to.
    pub row: usize,
    pub width: Formula,
    pub margin_left: Option<Formula>,
    pub margin_right: Option<Length>,
    pub margin_bottom: Option<Length>,
}

/// The computed layout of a whole grid.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutPlan {
    /// Cells in row-major order.
    pub cells: Vec<LayoutCell>,
    /// Resolved unit-column count (0 for grids without ASCII rows).
    pub columns: u32,
    /// Number of rows, blank and distribute rows included.
    pub rows: usize,
    pub gutter_width: Length,
    pub gutter_height: Length,
}

impl LayoutPlan {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Look up a cell by its 1-based global index.
    pub fn cell(&self, index: usize) -> Option<&LayoutCell> {
        index.checked_sub(1).and_then(|i| self.cells.get(i))
    }

    /// Cells belonging to the given 1-based row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &LayoutCell> {
        self.cells.iter().filter(move |cell| cell.row == row)
    }
}
