//! Width and margin formulas.
//!
//! A grid of `tracks` unit-columns separated by gutters gives each unit-column
//! the width `unit = (100% - (tracks - 1) * gutter) / tracks`. Cells spanning
//! several unit-columns absorb the gutters between them.

use std::fmt;

use gridspec_core::Length;

/// A width relative to the container, expressed over unit-columns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Formula {
    /// Width of a cell covering `span` unit-columns:
    /// `span * (unit + gutter) - gutter`.
    Span { span: u32, tracks: u32, gutter: Length },
    /// Blank space of `offset` unit-columns plus the gutters they cover:
    /// `offset * (unit + gutter)`.
    Offset { offset: u32, tracks: u32, gutter: Length },
}

impl Formula {
    pub fn span(span: u32, tracks: u32, gutter: Length) -> Self {
        Formula::Span { span, tracks, gutter }
    }

    pub fn offset(offset: u32, tracks: u32, gutter: Length) -> Self {
        Formula::Offset { offset, tracks, gutter }
    }

    /// Evaluate against a container width in pixels.
    ///
    /// Returns `None` when the gutter cannot be resolved without a font
    /// context (`em`, `rem`).
    pub fn evaluate(&self, container: f64) -> Option<f64> {
        match *self {
            Formula::Span { span, tracks, gutter } => {
                let g = gutter.resolve_px(container)?;
                let unit = unit_width(container, tracks, g);
                Some(span as f64 * (unit + g) - g)
            }
            Formula::Offset { offset, tracks, gutter } => {
                let g = gutter.resolve_px(container)?;
                let unit = unit_width(container, tracks, g);
                Some(offset as f64 * (unit + g))
            }
        }
    }
}

fn unit_width(container: f64, tracks: u32, gutter: f64) -> f64 {
    (container - (tracks as f64 - 1.0) * gutter) / tracks as f64
}

/// CSS expression for one unit-column, e.g. `(100% - 60px) / 3`.
fn unit_expr(tracks: u32, gutter: Length) -> String {
    let gutters = gutter.scaled(tracks.saturating_sub(1) as f64);
    let available = if gutters.is_zero() {
        "100%".to_string()
    } else {
        format!("(100% - {gutters})")
    };

    if tracks == 1 {
        available
    } else {
        format!("{available} / {tracks}")
    }
}

/// Writes `calc(unit * units + absorbed)`, dropping `* 1` and `+ 0` terms.
fn write_calc(
    f: &mut fmt::Formatter<'_>,
    units: u32,
    tracks: u32,
    gutter: Length,
    absorbed: Length,
) -> fmt::Result {
    let unit = unit_expr(tracks, gutter);
    let term = if units == 1 { unit } else { format!("{unit} * {units}") };
    if absorbed.is_zero() {
        write!(f, "calc({term})")
    } else {
        write!(f, "calc({term} + {absorbed})")
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Formula::Span { span, tracks, .. } if span >= tracks => f.write_str("100%"),
            Formula::Span { span, tracks, gutter } => {
                write_calc(f, span, tracks, gutter, gutter.scaled(span as f64 - 1.0))
            }
            Formula::Offset { offset, tracks, gutter } => {
                write_calc(f, offset, tracks, gutter, gutter.scaled(offset as f64))
            }
        }
    }
}
