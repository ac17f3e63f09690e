//! Buffer geometry errors.

use thiserror::Error;

/// Rejections raised while validating access to a raw pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaneError {
    #[error("stride {stride} is smaller than a packed row of {row_bytes} bytes")]
    StrideTooSmall { stride: usize, row_bytes: usize },

    #[error("buffer holds {len} bytes but the described plane needs {needed}")]
    BufferTooShort { len: usize, needed: usize },

    #[error("zero-sized plane ({width}x{height})")]
    EmptyPlane { width: u32, height: u32 },
}
