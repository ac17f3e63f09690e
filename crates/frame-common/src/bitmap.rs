//! Owned output bitmaps in display-ready Bgra8 form.

use serde::{Deserialize, Serialize};

use crate::PlaneError;

/// Alpha interpretation of a Bgra8 buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlphaMode {
    /// Color channels pre-scaled by alpha; what display surfaces expect.
    Premultiplied,
    Straight,
}

/// A 32-bit BGRA bitmap with an explicit row stride.
///
/// Conversions allocate one of these per frame and hand it to the display
/// surface; the surface takes ownership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bgra8Bitmap {
    width: u32,
    height: u32,
    stride: usize,
    alpha: AlphaMode,
    data: Vec<u8>,
}

impl Bgra8Bitmap {
    /// Allocate a tightly-packed premultiplied bitmap, zero-filled.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * 4;
        Self {
            width,
            height,
            stride,
            alpha: AlphaMode::Premultiplied,
            data: vec![0; stride * height as usize],
        }
    }

    /// Allocate with a caller-chosen stride, which must cover a packed row.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> Result<Self, PlaneError> {
        let row_bytes = width as usize * 4;
        if stride < row_bytes {
            return Err(PlaneError::StrideTooSmall { stride, row_bytes });
        }
        Ok(Self {
            width,
            height,
            stride,
            alpha: AlphaMode::Premultiplied,
            data: vec![0; stride * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn alpha_mode(&self) -> AlphaMode {
        self.alpha
    }

    /// Packed bytes of one row; padding excluded.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.data[start..start + self.width as usize * 4]
    }

    /// Mutable packed bytes of one row; padding excluded.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let width = self.width as usize * 4;
        let start = y as usize * self.stride;
        &mut self.data[start..start + width]
    }

    /// The whole backing buffer, padding included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable backing buffer for row-chunked writers.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
