//! gridspec CLI - compile ASCII-art grid specs to CSS.

mod config;
mod logging;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use gridspec_core::GridError;
use gridspec_css::render_css;
use gridspec_layout::compile;
use gridspec_parser::spec_from_str;
use thiserror::Error;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "gridspec")]
#[command(version)]
#[command(about = "Compile ASCII-art grid specs into CSS layout rules", long_about = None)]
struct Cli {
    /// Input JSON spec (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Horizontal gutter, e.g. 30px or 1.5rem
    #[arg(short, long)]
    gutter: Option<String>,

    /// Vertical gutter (defaults to the horizontal gutter)
    #[arg(long)]
    gutter_height: Option<String>,

    /// Force the unit-column count instead of resolving it from the widest row
    #[arg(long)]
    columns: Option<u32>,

    /// Selector of the grid container
    #[arg(short, long)]
    selector: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// JSON config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// CSS rules for the container and each cell
    Css,
    /// The layout plan as JSON
    Json,
}

impl Cli {
    fn overrides(&self) -> Config {
        Config {
            gutter: self.gutter.clone(),
            gutter_height: self.gutter_height.clone(),
            columns: self.columns,
            selector: self.selector.clone(),
        }
    }
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("Invalid config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("Failed to serialize layout plan: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] GridError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let file_config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = file_config.merge(cli.overrides());

    let source = read_input(cli.input.as_deref())?;
    let output = compile_source(&source, &config, cli.format)?;
    write_output(cli.output.as_deref(), &output)
}

fn compile_source(source: &str, config: &Config, format: Format) -> Result<String, CliError> {
    let spec = spec_from_str(source).map_err(GridError::from)?;
    let plan = compile(&spec, &config.grid_options()?)?;
    tracing::info!(cells = plan.len(), columns = plan.columns, "compiled grid");

    match format {
        Format::Css => Ok(render_css(&plan, &config.css_options())),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&plan).map_err(CliError::Serialize)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, output).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| CliError::Io {
                path: "<stdout>".to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridspec_core::SpecError;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "gridspec", "grid.json", "-g", "20px", "--columns", "4", "-f", "json",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("grid.json")));
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.overrides().gutter.as_deref(), Some("20px"));
        assert_eq!(cli.overrides().columns, Some(4));
    }

    #[test]
    fn test_compile_source_css() {
        let css = compile_source(r#"["x x"]"#, &Config::default(), Format::Css).unwrap();
        assert!(css.starts_with(".grid {\n  display: flex;\n  flex-wrap: wrap;\n}\n"));
        assert!(css.contains(".grid > :nth-child(2) {"));
    }

    #[test]
    fn test_compile_source_json() {
        let json = compile_source(r#"[["distribute", 2]]"#, &Config::default(), Format::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["cells"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["cells"][1]["index"], 2);
        assert_eq!(value["columns"], 0);
    }

    #[test]
    fn test_compile_source_rejects_scalar_spec() {
        let err = compile_source("42", &Config::default(), Format::Css).unwrap_err();
        assert!(matches!(
            err,
            CliError::Grid(GridError::Spec(SpecError::InvalidSpecType { .. }))
        ));
    }
}
