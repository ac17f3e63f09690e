//! Pseudo-color rendering of raw sensor samples.
//!
//! Implements the pixel core of the frame pipeline:
//! - Color ramp interpolation
//! - Precomputed lookup tables
//! - Per-format scanline transforms
//! - Row-by-row bitmap transform engine

pub mod engine;
pub mod error;
pub mod lut;
pub mod ramp;
pub mod scanline;

pub use engine::{colorize, copy_bgra8, downsample_rotate, PACKED_GRAY_WIDTH};
pub use error::ColorizeError;
pub use lut::{ColorLut, ColorTables, LUT_SIZE};
pub use ramp::{ColorRamp, RampError};
pub use scanline::{DepthCalibration, RowTransform, DEPTH_RAW_CEILING, NO_SIGNAL};
