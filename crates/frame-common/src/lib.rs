//! Common types shared across the sensor frame pipeline crates.

pub mod bitmap;
pub mod color;
pub mod error;
pub mod format;
pub mod frame;

pub use bitmap::{AlphaMode, Bgra8Bitmap};
pub use color::Bgra;
pub use error::PlaneError;
pub use format::{subtypes, PixelFormat, SourceKind};
pub use frame::{SamplePlane, SensorFrame};
