//! Column count resolution.

use gridspec_core::NormalizedRow;

/// Resolve the grid's unit-column count: the width of the widest ASCII row.
///
/// Distribute rows are ignored. Returns 0 when there are no ASCII rows, or
/// only blank ones; no cell ever divides by the count in that case.
pub fn resolve_columns(rows: &[NormalizedRow]) -> u32 {
    rows.iter()
        .filter_map(|row| match row {
            NormalizedRow::Parsed(parsed) => Some(parsed.width()),
            NormalizedRow::Distribute(_) => None,
        })
        .max()
        .unwrap_or(0)
}
