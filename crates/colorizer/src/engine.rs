//! Row-by-row frame-to-bitmap drivers.
//!
//! Input and output strides are independent and may both exceed the packed
//! row size; every driver walks rows through the checked accessors, so
//! padding is never read or written.

use frame_common::{Bgra8Bitmap, PixelFormat, SamplePlane};
use rayon::prelude::*;

use crate::error::ColorizeError;
use crate::lut::ColorTables;
use crate::scanline::RowTransform;

/// Pixel count at which row conversion moves onto the rayon pool.
const PARALLEL_THRESHOLD: usize = 4096;

/// Reported pixel width of the packed low-resolution gray mode: the sensor
/// delivers 640 single-byte samples per row, packed four to a 32-bit pixel.
pub const PACKED_GRAY_WIDTH: u32 = 160;

/// True sample geometry behind a packed low-resolution frame.
pub const PACKED_GRAY_SOURCE: (u32, u32) = (640, 480);

const DOWNSAMPLED_WIDTH: u32 = PACKED_GRAY_SOURCE.1 / 2;
const DOWNSAMPLED_HEIGHT: u32 = PACKED_GRAY_SOURCE.0 / 2;

/// Colorize a raw plane row by row with the given transform.
pub fn colorize(
    plane: &SamplePlane<'_>,
    transform: RowTransform,
    tables: &ColorTables,
) -> Result<Bgra8Bitmap, ColorizeError> {
    let expected = transform.input_format();
    if plane.format() != expected {
        return Err(ColorizeError::FormatMismatch {
            expected,
            actual: plane.format(),
        });
    }

    let width = plane.width() as usize;
    let height = plane.height() as usize;
    let mut bitmap = Bgra8Bitmap::new(plane.width(), plane.height());
    let stride = bitmap.stride();

    let out = bitmap.as_bytes_mut();
    if width * height >= PARALLEL_THRESHOLD {
        out.par_chunks_mut(stride).enumerate().for_each(|(y, row)| {
            transform.convert_row(tables, width, plane.row(y as u32), &mut row[..width * 4]);
        });
    } else {
        for (y, row) in out.chunks_mut(stride).enumerate() {
            transform.convert_row(tables, width, plane.row(y as u32), &mut row[..width * 4]);
        }
    }
    Ok(bitmap)
}

/// Copy an already-BGRA plane into an owned bitmap.
///
/// Only the valid `width * 4` region of each row is touched.
pub fn copy_bgra8(plane: &SamplePlane<'_>) -> Result<Bgra8Bitmap, ColorizeError> {
    if plane.format() != PixelFormat::Bgra8 {
        return Err(ColorizeError::FormatMismatch {
            expected: PixelFormat::Bgra8,
            actual: plane.format(),
        });
    }
    let mut bitmap = Bgra8Bitmap::new(plane.width(), plane.height());
    for y in 0..plane.height() {
        bitmap.row_mut(y).copy_from_slice(plane.row(y));
    }
    Ok(bitmap)
}

/// Downsample the packed 640x480 gray mode into a rotated 240x320 bitmap.
///
/// Each output pixel is the mean of a 2x2 input block, and the image is
/// rotated a quarter turn to match the fixed mounting of this sensor:
/// output rows run along input columns, output columns along inverted input
/// rows. Not a general resize.
pub fn downsample_rotate(plane: &SamplePlane<'_>) -> Result<Bgra8Bitmap, ColorizeError> {
    let (src_width, src_height) = PACKED_GRAY_SOURCE;
    if plane.format() != PixelFormat::Gray8 {
        return Err(ColorizeError::FormatMismatch {
            expected: PixelFormat::Gray8,
            actual: plane.format(),
        });
    }
    if plane.width() != src_width || plane.height() != src_height {
        return Err(ColorizeError::UnexpectedGeometry {
            expected_width: src_width,
            expected_height: src_height,
            width: plane.width(),
            height: plane.height(),
        });
    }

    let mut bitmap = Bgra8Bitmap::new(DOWNSAMPLED_WIDTH, DOWNSAMPLED_HEIGHT);
    for out_y in 0..DOWNSAMPLED_HEIGHT {
        let x = (out_y * 2) as usize;
        let out_row = bitmap.row_mut(out_y);
        for in_y in (0..src_height).step_by(2) {
            let top = plane.row(in_y);
            let bottom = plane.row(in_y + 1);
            let mean = ((u32::from(top[x])
                + u32::from(top[x + 1])
                + u32::from(bottom[x])
                + u32::from(bottom[x + 1]))
                >> 2) as u8;
            let out_x = (DOWNSAMPLED_WIDTH - 1 - in_y / 2) as usize * 4;
            out_row[out_x..out_x + 4].copy_from_slice(&[mean, mean, mean, 0xFF]);
        }
    }
    Ok(bitmap)
}
