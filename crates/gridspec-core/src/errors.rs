//! Error types for the gridspec compiler.

use thiserror::Error;

/// Top-level error type for the gridspec compiler.
#[derive(Debug, Error)]
pub enum GridError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors while reading or normalizing a grid specification.
///
/// Row numbers are 1-based positions in the spec; columns are 1-based
/// character positions within the row text.
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("Invalid grid spec JSON: {message}")]
    InvalidJson { message: String },

    #[error("Grid spec must be a list of rows, found {found}")]
    InvalidSpecType { found: String },

    #[error("Invalid character {found:?} in row {row}, column {column}: rows may only contain 'x', '-' and spaces")]
    MalformedCharacter { row: usize, column: usize, found: char },

    #[error("Malformed row {row}: {reason}")]
    MalformedSpec { row: usize, reason: String },

    #[error("Invalid length: {value:?}")]
    InvalidLength { value: String },
}

/// Errors during layout computation.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Row {row} is {width} columns wide but the grid only has {columns}")]
    ColumnOverflow { row: usize, width: u32, columns: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SpecError::MalformedCharacter { row: 2, column: 3, found: 'o' };
        assert_eq!(
            err.to_string(),
            "Invalid character 'o' in row 2, column 3: rows may only contain 'x', '-' and spaces"
        );

        let err: GridError = LayoutError::ColumnOverflow { row: 1, width: 5, columns: 4 }.into();
        assert_eq!(err.to_string(), "Row 1 is 5 columns wide but the grid only has 4");
    }
}
