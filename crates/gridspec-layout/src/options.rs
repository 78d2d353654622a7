//! Options for grid compilation.

use gridspec_core::Length;

use crate::engine::Gutters;

/// Options for [`compile`](crate::compile).
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Horizontal gutter between cells
    pub gutter_width: Length,
    /// Vertical gutter between rows; `None` uses `gutter_width`
    pub gutter_height: Option<Length>,
    /// Forced unit-column count; `None` resolves it from the widest row
    pub columns: Option<u32>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            gutter_width: Length::px(30.0),
            gutter_height: None,
            columns: None,
        }
    }
}

impl GridOptions {
    /// Set the gutter in both directions.
    pub fn with_gutter(mut self, gutter: Length) -> Self {
        self.gutter_width = gutter;
        self
    }

    pub fn with_gutter_height(mut self, gutter: Length) -> Self {
        self.gutter_height = Some(gutter);
        self
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn gutters(&self) -> Gutters {
        Gutters {
            width: self.gutter_width,
            height: self.gutter_height.unwrap_or(self.gutter_width),
        }
    }
}
