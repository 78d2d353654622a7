//! Scanners for ASCII-art rows and length literals.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, map, map_res, opt, recognize, value},
    multi::many0,
    sequence::{pair, tuple},
    IResult,
};

use gridspec_core::{Cell, Length, LengthUnit, ParsedRow, SpecError};

/// Blank space before a cell. Spaces are unit-columns; a `-` that does not
/// join two `x` tokens takes no room.
fn gap(input: &str) -> IResult<&str, u32> {
    map(take_while(|c: char| c == ' ' || c == '-'), |s: &str| {
        s.chars().filter(|&c| c == ' ').count() as u32
    })(input)
}

/// A run of `x` tokens joined by `-`, e.g. `x-x-x`. Yields the span.
fn cell_run(input: &str) -> IResult<&str, u32> {
    map(
        recognize(pair(char('x'), many0(pair(char('-'), char('x'))))),
        |s: &str| s.matches('x').count() as u32,
    )(input)
}

fn cell(input: &str) -> IResult<&str, Cell> {
    map(pair(gap, cell_run), |(offset, span)| Cell { span, offset })(input)
}

/// Tokenize one ASCII-art row into cells, left to right.
///
/// Never fails. Scanning stops at the first character outside `x`, `-` and
/// space, so callers validate the alphabet first (see
/// [`normalize_row`](crate::normalize_row)). Blank space after the last
/// cell is dropped.
pub fn tokenize(row: &str) -> ParsedRow {
    let cells = many0(cell)(row).map(|(_, cells)| cells).unwrap_or_default();
    ParsedRow::new(cells)
}

/// Parse a non-negative number (integer or decimal).
fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            take_while1(|c: char| c.is_ascii_digit()),
            opt(pair(char('.'), take_while1(|c: char| c.is_ascii_digit()))),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a unit suffix.
fn unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Px, tag("px")),
        value(LengthUnit::Percent, tag("%")),
        value(LengthUnit::Rem, tag("rem")),
        value(LengthUnit::Em, tag("em")),
    ))(input)
}

/// Parse a gutter length literal such as `30px`, `1.5rem` or `2%`.
///
/// A bare `0` is accepted; any other number needs a unit.
pub fn parse_length(input: &str) -> Result<Length, SpecError> {
    let invalid = || SpecError::InvalidLength { value: input.to_string() };

    let (_, (value, unit)) = all_consuming(pair(number, opt(unit)))(input.trim())
        .map_err(|_| invalid())?;

    match unit {
        Some(unit) => Ok(Length { value, unit }),
        None if value == 0.0 => Ok(Length::ZERO),
        None => Err(invalid()),
    }
}
