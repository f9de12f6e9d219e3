//! Error types for mosaic generation and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
///
/// Per-image load and save failures are recoverable at their call sites:
/// the batch shell skips the affected file and keeps going, reporting
/// aggregate counts at the end. An empty tile pool is deliberately not an
/// error; the engine falls back to shuffling the target's own tiles.
#[derive(Debug)]
pub enum MosaicError {
    /// Grid order below 1 supplied to the partition layer
    ///
    /// The high-level engine treats orders of 0 or 1 as the identity
    /// mosaic instead, so this only surfaces through direct use of
    /// [`crate::grid::GridSpec::compute`].
    InvalidGridOrder {
        /// The rejected grid order
        order: usize,
    },

    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decode error
        source: image::ImageError,
    },

    /// Failed to encode a generated mosaic to disk
    ImageSave {
        /// Path where the save was attempted
        path: PathBuf,
        /// Underlying encode error
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

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridOrder { order } => {
                write!(f, "Grid order {order} is invalid (must be at least 1)")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageSave { path, source } => {
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
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageSave { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidGridOrder { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
