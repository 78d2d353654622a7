//! Core types, grid model definitions, and errors for the gridspec compiler.
//!
//! This crate provides the foundational types used across all other gridspec crates:
//! - Grid spec model (rows as written, tokenized cells, normalized rows)
//! - Length values used for gutters
//! - Error types for every pipeline stage

pub mod errors;
pub mod grid;
pub mod types;

pub use errors::*;
pub use grid::*;
pub use types::*;
