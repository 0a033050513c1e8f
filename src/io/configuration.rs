//! Rendering constants and runtime configuration defaults

// Canvas values
/// Background (paper) value every canvas starts from
pub const BACKGROUND: u8 = 255;
/// Ink value drawn by the tile patterns
pub const INK: u8 = 0;

/// Maximum value of an 8-bit source sample, used to normalise cell sums
pub const SAMPLE_MAX: f64 = 255.0;

// Default values for configurable parameters
/// Supersampling factor applied to the output canvas
pub const DEFAULT_QUALITY: usize = 8;

/// Divisor applied to `sqrt(width * height)` when no cell size is given
pub const DEFAULT_CELL_SIZE_DIVISOR: f64 = 100.0;

/// Fixed seed for reproducible stippling
pub const DEFAULT_SEED: u64 = 42;

/// Radius of a single stipple dot in output pixels
pub const STIPPLE_RADIUS: f64 = 1.0;

// Source discovery
/// File in the working directory listing extra search directories
pub const PATHS_FILE: &str = "paths.txt";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pattern";
/// Extension used when the source file has none
pub const DEFAULT_OUTPUT_EXTENSION: &str = "png";

/// Cell size used when the user leaves it blank
///
/// Scales with the image so that roughly a hundred cells span its geometric
/// mean side; never smaller than one pixel.
pub fn default_cell_size(width: u32, height: u32) -> usize {
    let area = f64::from(width) * f64::from(height);
    let size = (area.sqrt() / DEFAULT_CELL_SIZE_DIVISOR).round();
    (size as usize).max(1)
}
