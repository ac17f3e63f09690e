//! Source kinds, pixel formats, and media subtype identifiers.

use serde::{Deserialize, Serialize};

/// Kind of sensor producing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Color,
    Depth,
    Infrared,
}

/// Pixel layout of a frame's raw sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 32-bit blue/green/red/alpha.
    Bgra8,
    /// 8-bit single channel.
    Gray8,
    /// 16-bit single channel, little endian.
    Gray16,
    /// Planar luma plus interleaved chroma; not renderable here.
    Nv12,
    /// Packed 4:2:2 luma/chroma; not renderable here.
    Yuy2,
}

impl PixelFormat {
    /// Bytes occupied by one pixel of the dominant plane.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra8 => 4,
            PixelFormat::Gray8 => 1,
            PixelFormat::Gray16 => 2,
            PixelFormat::Nv12 => 1,
            PixelFormat::Yuy2 => 2,
        }
    }
}

/// Media encoding subtype identifiers used during reader negotiation.
///
/// Capture drivers report these with inconsistent casing; compare
/// case-insensitively.
pub mod subtypes {
    pub const BGRA8: &str = "BGRA8";
    pub const D16: &str = "D16";
    pub const L8: &str = "L8";
    pub const L16: &str = "L16";
}
