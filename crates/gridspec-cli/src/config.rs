//! Configuration for the command-line front end.
//!
//! Settings come from an optional JSON file and from command-line flags;
//! flags win over the file, the file wins over built-in defaults.
//!
//! ```json
//! { "gutter": "30px", "gutter_height": "20px", "columns": 12, "selector": ".grid" }
//! ```

use std::path::Path;

use gridspec_core::GridError;
use gridspec_css::CssOptions;
use gridspec_layout::GridOptions;
use gridspec_parser::parse_length;
use serde::Deserialize;

use crate::CliError;

/// Settings shared by the config file and the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub gutter: Option<String>,
    pub gutter_height: Option<String>,
    pub columns: Option<u32>,
    pub selector: Option<String>,
}

impl Config {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, CliError> {
        serde_json::from_str(source).map_err(CliError::Config)
    }

    /// Overlay `other` on top of `self`; values set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            gutter: other.gutter.or(self.gutter),
            gutter_height: other.gutter_height.or(self.gutter_height),
            columns: other.columns.or(self.columns),
            selector: other.selector.or(self.selector),
        }
    }

    pub fn grid_options(&self) -> Result<GridOptions, GridError> {
        let mut options = GridOptions::default();
        if let Some(gutter) = &self.gutter {
            options = options.with_gutter(parse_length(gutter)?);
        }
        if let Some(height) = &self.gutter_height {
            options = options.with_gutter_height(parse_length(height)?);
        }
        if let Some(columns) = self.columns {
            options = options.with_columns(columns);
        }
        Ok(options)
    }

    pub fn css_options(&self) -> CssOptions {
        match &self.selector {
            Some(selector) => CssOptions::default().with_selector(selector.clone()),
            None => CssOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspec_core::{Length, SpecError};

    #[test]
    fn test_config_from_json() {
        let config = Config::from_json(r#"{ "gutter": "2rem", "columns": 12 }"#).unwrap();
        assert_eq!(config.gutter.as_deref(), Some("2rem"));
        assert_eq!(config.columns, Some(12));
        assert_eq!(config.selector, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(matches!(
            Config::from_json(r#"{ "gutters": "2rem" }"#),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Config {
            gutter: Some("10px".to_string()),
            selector: Some(".file".to_string()),
            ..Default::default()
        };
        let flags = Config {
            selector: Some(".flag".to_string()),
            ..Default::default()
        };

        let merged = file.merge(flags);
        assert_eq!(merged.gutter.as_deref(), Some("10px"));
        assert_eq!(merged.selector.as_deref(), Some(".flag"));
    }

    #[test]
    fn test_grid_options() {
        let config = Config {
            gutter: Some("12px".to_string()),
            gutter_height: Some("1em".to_string()),
            columns: Some(6),
            ..Default::default()
        };
        let options = config.grid_options().unwrap();

        assert_eq!(options.gutter_width, Length::px(12.0));
        assert_eq!(options.gutters().height.to_string(), "1em");
        assert_eq!(options.columns, Some(6));
    }

    #[test]
    fn test_grid_options_defaults() {
        assert_eq!(Config::default().grid_options().unwrap(), GridOptions::default());
        assert_eq!(Config::default().css_options(), CssOptions::default());
    }

    #[test]
    fn test_invalid_gutter() {
        let config = Config {
            gutter: Some("wide".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.grid_options(),
            Err(GridError::Spec(SpecError::InvalidLength { .. }))
        ));
    }
}
