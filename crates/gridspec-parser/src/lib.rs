//! Parser for gridspec grid specifications.
//!
//! This crate turns the written form of a grid into normalized rows:
//! - [`tokenize`] scans one ASCII-art row into `(span, offset)` cells
//! - [`normalize`] validates every row of a [`GridSpec`](gridspec_core::GridSpec) and tokenizes it
//! - [`spec_from_json`] reads a spec from its JSON list form
//!
//! Built on `nom` for the small scanners involved.
//!
//! # Example
//!
//! ```
//! use gridspec_parser::{normalize, spec_from_str};
//!
//! let spec = spec_from_str(r#"["x-x x", ["distribute", 2]]"#)?;
//! let rows = normalize(&spec)?;
//! assert_eq!(rows.len(), 2);
//! # Ok::<(), gridspec_core::SpecError>(())
//! ```

mod json;
mod lexer;
mod normalize;

pub use json::{spec_from_json, spec_from_str};
pub use lexer::{parse_length, tokenize};
pub use normalize::{normalize, normalize_row};
