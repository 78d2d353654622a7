//! Spec normalization: validate each written row and tokenize it.

use std::num::NonZeroU32;

use gridspec_core::{GridSpec, NormalizedRow, RowEntry, SpecError};
use tracing::{debug, trace};

use crate::lexer::tokenize;

/// Normalize a grid spec, one output row per input row, in order.
///
/// Fails on the first malformed row; no partial result is returned.
pub fn normalize(spec: &GridSpec) -> Result<Vec<NormalizedRow>, SpecError> {
    let rows = spec
        .rows
        .iter()
        .enumerate()
        .map(|(i, entry)| normalize_row(i + 1, entry))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "normalized grid spec");
    Ok(rows)
}

/// Normalize a single row. `row` is its 1-based position, used in errors.
pub fn normalize_row(row: usize, entry: &RowEntry) -> Result<NormalizedRow, SpecError> {
    match entry {
        RowEntry::Ascii(text) => {
            validate_alphabet(row, text)?;
            let parsed = tokenize(text);
            trace!(row, cells = parsed.cells.len(), width = parsed.width(), "tokenized row");
            Ok(NormalizedRow::Parsed(parsed))
        }
        RowEntry::Distribute(count) => NonZeroU32::new(*count)
            .map(NormalizedRow::Distribute)
            .ok_or_else(|| SpecError::MalformedSpec {
                row,
                reason: "distribute count must be a positive integer, found 0".to_string(),
            }),
    }
}

fn validate_alphabet(row: usize, text: &str) -> Result<(), SpecError> {
    match text
        .chars()
        .enumerate()
        .find(|&(_, c)| !matches!(c, 'x' | '-' | ' '))
    {
        Some((i, found)) => Err(SpecError::MalformedCharacter {
            row,
            column: i + 1,
            found,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspec_core::{Cell, ParsedRow};

    fn distribute(n: u32) -> NormalizedRow {
        NormalizedRow::Distribute(NonZeroU32::new(n).unwrap())
    }

    #[test]
    fn test_normalize_preserves_order() {
        let spec = GridSpec::new(vec![
            RowEntry::Distribute(2),
            RowEntry::from("x-x x"),
            RowEntry::Distribute(3),
        ]);

        let rows = normalize(&spec).unwrap();
        assert_eq!(
            rows,
            vec![
                distribute(2),
                NormalizedRow::Parsed(ParsedRow::new(vec![Cell::new(2, 0), Cell::new(1, 1)])),
                distribute(3),
            ]
        );
    }

    #[test]
    fn test_normalize_blank_row_is_legal() {
        let spec = GridSpec::new(vec![RowEntry::from("   ")]);
        let rows = normalize(&spec).unwrap();
        assert_eq!(rows, vec![NormalizedRow::Parsed(ParsedRow::default())]);
    }

    #[test]
    fn test_normalize_empty_spec() {
        assert!(normalize(&GridSpec::default()).unwrap().is_empty());
    }

    #[test]
    fn test_normalize_rejects_foreign_character() {
        let spec = GridSpec::new(vec![RowEntry::from("x x"), RowEntry::from("x-o")]);
        assert_eq!(
            normalize(&spec),
            Err(SpecError::MalformedCharacter { row: 2, column: 3, found: 'o' })
        );
    }

    #[test]
    fn test_normalize_rejects_tabs() {
        let err = normalize_row(1, &RowEntry::from("x\tx")).unwrap_err();
        assert_eq!(err, SpecError::MalformedCharacter { row: 1, column: 2, found: '\t' });
    }

    #[test]
    fn test_normalize_rejects_zero_distribute() {
        let spec = GridSpec::new(vec![RowEntry::from("x"), RowEntry::Distribute(0)]);
        match normalize(&spec) {
            Err(SpecError::MalformedSpec { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected MalformedSpec, got {other:?}"),
        }
    }
}
