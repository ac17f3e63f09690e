//! Errors raised by the transform engine.

use frame_common::PixelFormat;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorizeError {
    #[error("transform reads {expected:?} but the plane is {actual:?}")]
    FormatMismatch {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    #[error("expected a {expected_width}x{expected_height} plane, got {width}x{height}")]
    UnexpectedGeometry {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },
}
