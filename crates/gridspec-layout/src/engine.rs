//! The layout engine: one forward pass over normalized rows.
//!
//! Row and cell counters are order-dependent, so they travel through the
//! pass as an explicit [`Cursor`] value. Each row is laid out by
//! [`layout_row`], which takes the cursor in and hands the advanced one back.

use gridspec_core::{Length, LayoutError, NormalizedRow, ParsedRow};
use tracing::{debug, trace};

use crate::formula::Formula;
use crate::plan::{LayoutCell, LayoutPlan};

/// Horizontal and vertical gutters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gutters {
    pub width: Length,
    pub height: Length,
}

impl Gutters {
    /// Same gutter in both directions.
    pub fn uniform(gutter: Length) -> Self {
        Self { width: gutter, height: gutter }
    }
}

/// Position reached in the pass: rows and cells emitted so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub cell: usize,
}

/// Grid-wide facts every row needs.
#[derive(Debug, Clone, Copy)]
pub struct RowContext {
    pub columns: u32,
    pub total_rows: usize,
    pub gutters: Gutters,
}

/// Lay out all rows in order.
///
/// Fails if an ASCII row is wider than `columns`; no partial plan is
/// returned.
pub fn layout(
    rows: &[NormalizedRow],
    columns: u32,
    gutters: Gutters,
) -> Result<LayoutPlan, LayoutError> {
    let ctx = RowContext {
        columns,
        total_rows: rows.len(),
        gutters,
    };

    let mut cells = Vec::with_capacity(rows.iter().map(NormalizedRow::cell_count).sum());
    let mut cursor = Cursor::default();
    for row in rows {
        let (row_cells, next) = layout_row(row, cursor, &ctx)?;
        cells.extend(row_cells);
        cursor = next;
    }

    debug!(columns, rows = cursor.row, cells = cursor.cell, "computed grid layout");

    Ok(LayoutPlan {
        cells,
        columns,
        rows: cursor.row,
        gutter_width: gutters.width,
        gutter_height: gutters.height,
    })
}

/// Lay out a single row starting at `cursor`.
pub fn layout_row(
    row: &NormalizedRow,
    cursor: Cursor,
    ctx: &RowContext,
) -> Result<(Vec<LayoutCell>, Cursor), LayoutError> {
    let row_index = cursor.row + 1;
    let margin_bottom = if row_index == ctx.total_rows {
        None
    } else {
        non_zero(ctx.gutters.height)
    };

    let cells = match row {
        NormalizedRow::Parsed(parsed) => {
            check_width(parsed, row_index, ctx.columns)?;
            parsed_cells(parsed, row_index, cursor.cell, ctx, margin_bottom)
        }
        NormalizedRow::Distribute(count) => {
            distributed_cells(count.get(), row_index, cursor.cell, ctx, margin_bottom)
        }
    };

    trace!(row = row_index, cells = cells.len(), "laid out row");

    let next = Cursor {
        row: row_index,
        cell: cursor.cell + cells.len(),
    };
    Ok((cells, next))
}

fn check_width(row: &ParsedRow, row_index: usize, columns: u32) -> Result<(), LayoutError> {
    let width = row.width();
    if width > columns {
        return Err(LayoutError::ColumnOverflow {
            row: row_index,
            width,
            columns,
        });
    }
    Ok(())
}

fn parsed_cells(
    row: &ParsedRow,
    row_index: usize,
    first_index: usize,
    ctx: &RowContext,
    margin_bottom: Option<Length>,
) -> Vec<LayoutCell> {
    let gutter = ctx.gutters.width;
    let last = row.cells.len();

    row.cells
        .iter()
        .enumerate()
        .map(|(i, cell)| LayoutCell {
            index: first_index + i + 1,
            row: row_index,
            width: Formula::span(cell.span, ctx.columns, gutter),
            margin_left: match row.blank_before(i) {
                0 => None,
                blank => Some(Formula::offset(blank, ctx.columns, gutter)),
            },
            margin_right: if i + 1 == last { None } else { non_zero(gutter) },
            margin_bottom,
        })
        .collect()
}

fn distributed_cells(
    count: u32,
    row_index: usize,
    first_index: usize,
    ctx: &RowContext,
    margin_bottom: Option<Length>,
) -> Vec<LayoutCell> {
    let gutter = ctx.gutters.width;

    (1..=count)
        .map(|j| LayoutCell {
            index: first_index + j as usize,
            row: row_index,
            width: Formula::span(1, count, gutter),
            margin_left: None,
            margin_right: if j == count { None } else { non_zero(gutter) },
            margin_bottom,
        })
        .collect()
}

fn non_zero(length: Length) -> Option<Length> {
    (!length.is_zero()).then_some(length)
}
