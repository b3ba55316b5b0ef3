//! # Error Types
//!
//! This module defines error types used throughout the spritepack library.

use thiserror::Error;

use crate::mode::{DrawMode, ElementType, OutputFormat};

/// Main error type for spritepack operations
#[derive(Debug, Error)]
pub enum SpritepackError {
    /// Pixel buffer length does not equal `width * height`
    #[error("Pixel buffer length mismatch: expected {expected} pixels, got {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// Width or height above the supported limit
    #[error("Dimensions {width}x{height} exceed the {max}x{max} limit")]
    DimensionsTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    /// Packed data has the wrong element width for its draw mode
    #[error("{draw_mode} data must be {expected} elements, got {actual}")]
    ElementTypeMismatch {
        draw_mode: DrawMode,
        expected: ElementType,
        actual: ElementType,
    },

    /// Draw mode selector not recognized
    #[error("Unsupported draw mode: {0}")]
    UnsupportedDrawMode(String),

    /// Output format selector not recognized
    #[error("Unsupported output format: {0}")]
    UnsupportedOutputFormat(String),

    /// Draw mode cannot be rendered by the chosen output format
    #[error("Unsupported combination: {draw_mode} cannot be emitted as {output_format}")]
    UnsupportedCombination {
        draw_mode: DrawMode,
        output_format: OutputFormat,
    },

    /// Some inputs of a batch export failed
    #[error("{failed} of {total} inputs failed")]
    BatchFailed { failed: usize, total: usize },

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// HTTP server error (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SpritepackError>;
