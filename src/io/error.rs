//! Error types for grid reduction, rendering and the surrounding file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern rendering operations
#[derive(Debug)]
pub enum PatternError {
    /// Cell size must be a positive number of pixels
    InvalidCellSize {
        /// The rejected cell size
        cell_size: usize,
    },

    /// Edge policy name was not one of `crop`, `black` or `white`
    UnsupportedEdgePolicy {
        /// The unrecognised policy text
        value: String,
    },

    /// Pattern name (or menu number) does not match the catalog
    UnknownPatternName {
        /// The unrecognised pattern text
        name: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source image could not be located in any search directory
    ImageNotFound {
        /// Name that was looked up
        path: PathBuf,
        /// Directories that were searched, in order
        searched: Vec<PathBuf>,
    },

    /// Source image exists but could not be decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Rendered image could not be written
    ///
    /// Usually an unknown file extension or an unwritable location.
    SaveFailed {
        /// Path where saving was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Channel canvases handed to the merger disagree in count or shape
    ChannelMismatch {
        /// Expected `(width, height)` or channel count
        expected: String,
        /// What was actually supplied
        found: String,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { cell_size } => {
                write!(f, "Invalid cell size {cell_size}: must be a positive integer")
            }
            Self::UnsupportedEdgePolicy { value } => {
                write!(
                    f,
                    "Unsupported edge policy '{value}' (expected crop, black or white)"
                )
            }
            Self::UnknownPatternName { name } => {
                write!(f, "Unknown pattern '{name}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageNotFound { path, searched } => {
                write!(f, "Could not find image '{}'", path.display())?;
                if !searched.is_empty() {
                    let dirs = searched
                        .iter()
                        .map(|dir| dir.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(f, " (searched: {dirs})")?;
                }
                Ok(())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::SaveFailed { path, source } => {
                write!(f, "Failed to save image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ChannelMismatch { expected, found } => {
                write!(f, "Channel mismatch: expected {expected}, found {found}")
            }
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::SaveFailed { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern rendering results
pub type Result<T> = std::result::Result<T, PatternError>;

impl From<image::ImageError> for PatternError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for PatternError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PatternError {
    PatternError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Reject a zero cell size before any grid is built
///
/// # Errors
///
/// Returns [`PatternError::InvalidCellSize`] when `cell_size` is zero
pub const fn ensure_cell_size(cell_size: usize) -> Result<usize> {
    if cell_size == 0 {
        Err(PatternError::InvalidCellSize { cell_size })
    } else {
        Ok(cell_size)
    }
}
