//! Core value types for gutters and rendered sizes.

use std::fmt;

/// A length value with unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub const ZERO: Length = Length { value: 0.0, unit: LengthUnit::Px };

    pub fn px(value: f64) -> Self {
        Self { value, unit: LengthUnit::Px }
    }

    pub fn rem(value: f64) -> Self {
        Self { value, unit: LengthUnit::Rem }
    }

    pub fn percent(value: f64) -> Self {
        Self { value, unit: LengthUnit::Percent }
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Multiply the value, keeping the unit.
    pub fn scaled(&self, factor: f64) -> Self {
        Self { value: self.value * factor, unit: self.unit }
    }

    /// Pixel size of this gutter inside a container `container` pixels wide.
    ///
    /// Percent gutters are a share of the container. Font-relative gutters
    /// depend on the page's font size and stay unresolved.
    pub fn resolve_px(&self, container: f64) -> Option<f64> {
        match self.unit {
            LengthUnit::Px => Some(self.value),
            LengthUnit::Percent => Some(container * self.value / 100.0),
            LengthUnit::Em | LengthUnit::Rem => None,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Four decimals; gutter multiples like 0.1rem * 3 pick up float noise
        let value = (self.value * 10_000.0).round() / 10_000.0;
        if value == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}{}", value, self.unit.suffix())
    }
}

/// Units accepted for gutters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    Px,
    /// Share of the container width
    Percent,
    Em,
    Rem,
}

impl LengthUnit {
    /// CSS suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Em => "em",
            LengthUnit::Rem => "rem",
        }
    }
}
