//! Tests for the row-by-row transform engine.

use colorizer::engine::{self, PACKED_GRAY_SOURCE};
use colorizer::{ColorizeError, ColorTables, RowTransform};
use frame_common::{PixelFormat, SamplePlane};

// ============================================================================
// Row copy
// ============================================================================

#[test]
fn test_copy_preserves_valid_region_of_padded_rows() {
    // 4x2 BGRA with 4 bytes of padding per row. Padding carries a marker
    // value that must never surface in the output.
    let width = 4u32;
    let stride = 20usize;
    let mut data = vec![0xABu8; stride * 2];
    for y in 0..2 {
        for i in 0..16 {
            data[y * stride + i] = (y * 16 + i) as u8;
        }
    }
    let plane = SamplePlane::new(PixelFormat::Bgra8, width, 2, stride, &data).unwrap();

    let bitmap = engine::copy_bgra8(&plane).unwrap();
    assert_eq!(bitmap.width(), 4);
    assert_eq!(bitmap.height(), 2);
    assert_eq!(bitmap.stride(), 16);
    assert_eq!(bitmap.row(0), &data[0..16]);
    assert_eq!(bitmap.row(1), &data[stride..stride + 16]);
    assert!(!bitmap.as_bytes().contains(&0xAB));
}

#[test]
fn test_copy_rejects_non_bgra_input() {
    let data = [0u8; 8];
    let plane = SamplePlane::new(PixelFormat::Gray8, 4, 2, 4, &data).unwrap();
    assert_eq!(
        engine::copy_bgra8(&plane).unwrap_err(),
        ColorizeError::FormatMismatch {
            expected: PixelFormat::Bgra8,
            actual: PixelFormat::Gray8,
        }
    );
}

// ============================================================================
// Colorize
// ============================================================================

#[test]
fn test_colorize_small_frame() {
    let tables = ColorTables::default();
    let data = [0u8, 255, 128, 0];
    let plane = SamplePlane::new(PixelFormat::Gray8, 2, 2, 2, &data).unwrap();

    let bitmap = engine::colorize(&plane, RowTransform::Infrared8, &tables).unwrap();
    assert_eq!(bitmap.row(0)[..4], colorizer::NO_SIGNAL.to_bytes());
    assert_eq!(bitmap.row(0)[4..], tables.infrared_color(1.0).to_bytes());
    assert_eq!(
        bitmap.row(1)[..4],
        tables.infrared_color(128.0 / 255.0).to_bytes()
    );
    assert_eq!(bitmap.row(1)[4..], colorizer::NO_SIGNAL.to_bytes());
}

#[test]
fn test_colorize_large_frame_matches_row_conversion() {
    // 64x64 crosses the parallel threshold; results must not depend on
    // which path ran.
    let tables = ColorTables::default();
    let data = vec![200u8; 64 * 64];
    let plane = SamplePlane::new(PixelFormat::Gray8, 64, 64, 64, &data).unwrap();

    let bitmap = engine::colorize(&plane, RowTransform::Infrared8, &tables).unwrap();
    let expected = tables.infrared_color(200.0 / 255.0).to_bytes();
    for y in 0..64 {
        for pixel in bitmap.row(y).chunks_exact(4) {
            assert_eq!(pixel, &expected);
        }
    }
}

#[test]
fn test_colorize_rejects_format_mismatch() {
    let tables = ColorTables::default();
    let data = [0u8; 8];
    let plane = SamplePlane::new(PixelFormat::Gray8, 4, 2, 4, &data).unwrap();
    assert_eq!(
        engine::colorize(&plane, RowTransform::Infrared16, &tables).unwrap_err(),
        ColorizeError::FormatMismatch {
            expected: PixelFormat::Gray16,
            actual: PixelFormat::Gray8,
        }
    );
}

// ============================================================================
// Downsample + rotate
// ============================================================================

/// Checkerboard where each 2x2 block is uniform, so the block mean equals
/// the block value and the expected output is exact.
fn checkerboard(stride: usize) -> Vec<u8> {
    let (width, height) = PACKED_GRAY_SOURCE;
    let mut data = vec![0xEEu8; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            data[y * stride + x] = if (x / 2 + y / 2) % 2 == 0 { 10 } else { 30 };
        }
    }
    data
}

#[test]
fn test_downsample_rotate_checkerboard() {
    let (width, height) = PACKED_GRAY_SOURCE;
    let stride = width as usize + 4; // padded input rows
    let data = checkerboard(stride);
    let plane = SamplePlane::new(PixelFormat::Gray8, width, height, stride, &data).unwrap();

    let bitmap = engine::downsample_rotate(&plane).unwrap();
    assert_eq!(bitmap.width(), 240);
    assert_eq!(bitmap.height(), 320);

    // Output row 0 comes from input columns 0..2; output column `ox` comes
    // from input rows 2*(239 - ox)..2*(239 - ox)+2.
    let row = bitmap.row(0);
    for ox in 0..240usize {
        let source_y_pair = 239 - ox;
        let expected = if source_y_pair % 2 == 0 { 10 } else { 30 };
        assert_eq!(
            &row[ox * 4..ox * 4 + 4],
            &[expected, expected, expected, 0xFF],
            "output column {ox}"
        );
    }

    // Spot check a second output row (input columns 2..4 flip the pattern).
    let row = bitmap.row(1);
    assert_eq!(&row[239 * 4..], &[30, 30, 30, 0xFF]);
}

#[test]
fn test_downsample_averages_blocks() {
    let (width, height) = PACKED_GRAY_SOURCE;
    let stride = width as usize;
    let mut data = vec![0u8; stride * height as usize];
    // One non-uniform block at input (x=0..2, y=0..2): mean of 1,3,5,7 = 4.
    data[0] = 1;
    data[1] = 3;
    data[stride] = 5;
    data[stride + 1] = 7;
    let plane = SamplePlane::new(PixelFormat::Gray8, width, height, stride, &data).unwrap();

    let bitmap = engine::downsample_rotate(&plane).unwrap();
    // That block lands at output row 0 (columns 0..2 of input), column 239.
    assert_eq!(&bitmap.row(0)[239 * 4..], &[4, 4, 4, 0xFF]);
}

#[test]
fn test_downsample_rejects_wrong_geometry() {
    let data = [0u8; 320 * 240];
    let plane = SamplePlane::new(PixelFormat::Gray8, 320, 240, 320, &data).unwrap();
    assert!(matches!(
        engine::downsample_rotate(&plane).unwrap_err(),
        ColorizeError::UnexpectedGeometry { .. }
    ));
}
