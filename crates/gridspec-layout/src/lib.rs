//! Layout planning for gridspec grids.
//!
//! This crate turns normalized rows into a [`LayoutPlan`]: per-cell widths,
//! margins, and the global index used to target each rendered child.
//!
//! # Architecture
//!
//! 1. **Normalization**: `gridspec-parser` validates and tokenizes rows
//! 2. **Column resolution**: the widest ASCII row fixes the unit-column count
//! 3. **Layout**: a single ordered pass assigns indices, widths and margins
//!
//! # Example
//!
//! ```
//! use gridspec_core::{GridSpec, RowEntry};
//! use gridspec_layout::{compile, GridOptions};
//!
//! let spec = GridSpec::new(vec![RowEntry::from("x-x x"), RowEntry::Distribute(2)]);
//! let plan = compile(&spec, &GridOptions::default())?;
//!
//! assert_eq!(plan.columns, 3);
//! assert_eq!(plan.len(), 4);
//! # Ok::<(), gridspec_core::GridError>(())
//! ```

mod engine;
mod formula;
mod options;
mod plan;
mod resolve;

pub use engine::{layout, layout_row, Cursor, Gutters, RowContext};
pub use formula::Formula;
pub use options::GridOptions;
pub use plan::{LayoutCell, LayoutPlan};
pub use resolve::resolve_columns;

use gridspec_core::{GridError, GridSpec};
use gridspec_parser::normalize;
use tracing::debug;

/// Compile a grid spec into a layout plan.
///
/// Runs normalization, column resolution and layout in order. With
/// `options.columns` set, that count replaces the resolved one and any
/// wider row fails with a column overflow.
pub fn compile(spec: &GridSpec, options: &GridOptions) -> Result<LayoutPlan, GridError> {
    let rows = normalize(spec)?;

    let widest = resolve_columns(&rows);
    let columns = options.columns.unwrap_or(widest);
    debug!(widest, columns, "resolved column count");

    Ok(layout(&rows, columns, options.gutters())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspec_core::{LayoutError, Length, RowEntry, SpecError};

    #[test]
    fn test_compile_pipeline() {
        let spec = GridSpec::new(vec![
            RowEntry::from("x-x x"),
            RowEntry::from("x x-x"),
            RowEntry::Distribute(2),
        ]);
        let plan = compile(&spec, &GridOptions::default()).unwrap();

        assert_eq!(plan.columns, 3);
        assert_eq!(plan.rows, 3);
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.gutter_height, Length::px(30.0));
    }

    #[test]
    fn test_compile_forced_columns() {
        let spec = GridSpec::new(vec![RowEntry::from("x x")]);
        let plan = compile(&spec, &GridOptions::default().with_columns(4)).unwrap();

        assert_eq!(plan.columns, 4);
        assert_eq!(plan.cells[0].width, Formula::span(1, 4, Length::px(30.0)));
    }

    #[test]
    fn test_compile_forced_columns_too_narrow() {
        let spec = GridSpec::new(vec![RowEntry::from("x x x")]);
        let err = compile(&spec, &GridOptions::default().with_columns(2)).unwrap_err();

        assert!(matches!(
            err,
            GridError::Layout(LayoutError::ColumnOverflow { row: 1, width: 3, columns: 2 })
        ));
    }

    #[test]
    fn test_compile_reports_spec_errors() {
        let spec = GridSpec::new(vec![RowEntry::from("x y")]);
        let err = compile(&spec, &GridOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            GridError::Spec(SpecError::MalformedCharacter { row: 1, column: 3, found: 'y' })
        ));
    }
}
