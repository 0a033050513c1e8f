//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Reduction of a pixel channel to a grid of cell averages
//! - The canvas and the primitives tiles are drawn with

/// Drawing surface and clipped fill primitives
pub mod canvas;
/// Cell grid reduction and edge policies
pub mod grid;

pub use canvas::{Canvas, CellPainter, Rect};
pub use grid::{EdgePolicy, IntensityGrid};
