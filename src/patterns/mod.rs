//! Tile pattern catalog and the generators behind it

/// Named pattern catalog and per-cell dispatch
pub mod catalog;
/// Brightness-to-shape tile generators
pub mod tiles;

pub use catalog::{Pattern, PatternFlags};
