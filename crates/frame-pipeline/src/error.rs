//! Error taxonomy for the conversion path.
//!
//! Every variant is contained within the pipeline: a frame that fails to
//! convert is dropped and never reaches the display, and nothing propagates
//! back to the capture subsystem.

use colorizer::ColorizeError;
use frame_common::{PixelFormat, PlaneError, SourceKind};
use thiserror::Error;

/// Why a frame could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("unsupported {kind:?} frame format {format:?}")]
    UnsupportedFormat {
        kind: SourceKind,
        format: PixelFormat,
    },

    #[error("frame buffer rejected: {0}")]
    Plane(#[from] PlaneError),

    #[error(transparent)]
    Colorize(#[from] ColorizeError),
}
