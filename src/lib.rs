//! Halftone-style image stylisation with geometric tile patterns
//!
//! An image is partitioned into square cells, each cell is reduced to its average
//! brightness, and a tile pattern (rings, discs, crosshatch, stippling, ...) is
//! drawn into the cell at a size proportional to that brightness.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Tile pattern catalog and generators
pub mod patterns;
/// Single-channel and colour rendering drivers
pub mod render;
/// Cell grid reduction and the drawing canvas
pub mod spatial;

pub use io::error::{PatternError, Result};
