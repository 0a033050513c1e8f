//! Input/output operations around the rendering core

/// Command-line parsing and the end-to-end render run
pub mod cli;
/// Rendering constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding, channel conversion and export
pub mod image;
/// Terminal progress reporting
pub mod progress;
/// Source image discovery
pub mod search;
