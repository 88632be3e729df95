//! Error types for geodist

use thiserror::Error;

/// Result type alias for geodist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for geodist
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Intensity field and companion grid disagree on shape
    #[error("Shape mismatch: image is {image:?} but companion grid is {other:?}")]
    ShapeMismatch {
        image: Vec<usize>,
        other: Vec<usize>,
    },

    /// Weighting parameter outside the unit interval
    #[error("Lambda out of range: {0} (must lie in [0, 1])")]
    LambdaOutOfRange(f32),

    /// Raster scanning requested with zero passes
    #[error("Invalid iteration count: 0 (must be at least 1)")]
    ZeroIterations,

    /// Seed mask contains no nonzero cell
    #[error("Empty seed mask: no nonzero cell to propagate from")]
    EmptySeeds,

    /// Raw buffer length does not match the declared shape
    #[error("Buffer length {len} does not match shape {shape:?} ({expected} cells)")]
    BufferSizeMismatch {
        len: usize,
        shape: Vec<usize>,
        expected: usize,
    },
}
