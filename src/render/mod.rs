//! Rendering drivers
//!
//! This module contains:
//! - The single-channel grid renderer
//! - Colour handling across red, green and blue channels

/// Grayscale or per-channel colour rendering
pub mod channels;
/// Grid-driven single-channel renderer
pub mod patterner;

pub use patterner::{Patterner, RenderObserver, Silent};
