//! Color value type in display byte order.

use serde::{Deserialize, Serialize};

/// A color as stored in a Bgra8 bitmap: blue, green, red, alpha byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Build from channels named in A,R,G,B order, the order color ramps are
    /// usually written down in.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a }
    }

    /// The four bytes of this color as they appear in a bitmap row.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            b: bytes[0],
            g: bytes[1],
            r: bytes[2],
            a: bytes[3],
        }
    }

    /// Write this color into one pixel slot of a BGRA scanline.
    #[inline]
    pub fn write_to(self, pixel: &mut [u8]) {
        pixel[..4].copy_from_slice(&self.to_bytes());
    }
}
