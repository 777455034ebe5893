// SPDX-License-Identifier: MPL-2.0

//! Error types for the slice pipeline

use std::fmt;

/// Result type alias using SliceError
pub type SliceResult<T> = Result<T, SliceError>;

/// Precondition failures for a single render call
///
/// These are the only failure modes in the core: decode and intensity
/// mapping are total over all 16-bit inputs. Every variant is fatal to
/// the render call that raised it and is reported before any output
/// byte is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// Frame width or height is zero
    InvalidDimensions { width: u32, height: u32 },
    /// Sample count does not match width * height
    FrameSizeMismatch { expected: usize, actual: usize },
    /// Output buffer length does not match width * height * 4
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::InvalidDimensions { width, height } => {
                write!(f, "Invalid frame dimensions: {}x{}", width, height)
            }
            SliceError::FrameSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Frame sample count mismatch: expected {}, got {}",
                    expected, actual
                )
            }
            SliceError::BufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Output buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SliceError {}
