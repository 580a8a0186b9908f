//! Core types for figtk: the design node tree, value types, and errors.
//!
//! This crate provides the foundational types used across the other figtk crates:
//! - `DesignNode` and `DesignDocument`, the typed view of a fetched design file
//! - Value types (`Rect`, `Color`, `Font`)
//! - The error taxonomy shared by fetching, synthesis, and export

pub mod errors;
pub mod node;
pub mod types;

pub use errors::*;
pub use node::*;
pub use types::*;
