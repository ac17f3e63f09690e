//! Frame routing: choose the conversion for a frame's kind and format.

use colorizer::engine;
use colorizer::scanline::{DepthCalibration, RowTransform};
use colorizer::ColorTables;
use frame_common::{subtypes, Bgra8Bitmap, PixelFormat, SensorFrame, SourceKind};

use crate::error::ConvertError;

/// Subtype the capture reader should deliver for a source, or `None` when
/// the source kind/subtype combination cannot be rendered.
///
/// Color sources are accepted regardless of native subtype and asked for
/// BGRA8 upstream; depth must be D16; infrared L8 or L16. Subtype casing
/// varies between drivers, so comparisons are case-insensitive and an
/// accepted subtype is echoed back in the caller's casing.
pub fn negotiate_reader_subtype<'a>(kind: SourceKind, subtype: &'a str) -> Option<&'a str> {
    match kind {
        SourceKind::Color => Some(subtypes::BGRA8),
        SourceKind::Depth => subtype
            .eq_ignore_ascii_case(subtypes::D16)
            .then_some(subtype),
        SourceKind::Infrared => (subtype.eq_ignore_ascii_case(subtypes::L8)
            || subtype.eq_ignore_ascii_case(subtypes::L16))
        .then_some(subtype),
    }
}

/// The conversion selected for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Conversion {
    /// Input is already display-ready BGRA; copy the valid region.
    CopyBgra8,
    /// Packed low-resolution gray mode; average and rotate.
    DownsampleRotate,
    /// Pseudo-color a single-channel plane row by row.
    Colorize(RowTransform),
}

pub(crate) fn select_conversion(
    frame: &SensorFrame<'_>,
    sensor_name: Option<&str>,
) -> Result<Conversion, ConvertError> {
    match (frame.kind, frame.plane.format()) {
        (SourceKind::Color, PixelFormat::Bgra8)
            if frame.plane.width() == engine::PACKED_GRAY_WIDTH =>
        {
            Ok(Conversion::DownsampleRotate)
        }
        (SourceKind::Color, PixelFormat::Bgra8) => Ok(Conversion::CopyBgra8),
        (SourceKind::Depth, PixelFormat::Gray16) => Ok(Conversion::Colorize(RowTransform::Depth(
            DepthCalibration::for_sensor(sensor_name.unwrap_or_default()),
        ))),
        (SourceKind::Infrared, PixelFormat::Gray16) => {
            Ok(Conversion::Colorize(RowTransform::Infrared16))
        }
        (SourceKind::Infrared, PixelFormat::Gray8) => {
            Ok(Conversion::Colorize(RowTransform::Infrared8))
        }
        (kind, format) => Err(ConvertError::UnsupportedFormat { kind, format }),
    }
}

/// Convert one frame into a display-ready bitmap.
pub fn convert_frame(
    frame: &SensorFrame<'_>,
    sensor_name: Option<&str>,
    tables: &ColorTables,
) -> Result<Bgra8Bitmap, ConvertError> {
    let bitmap = match select_conversion(frame, sensor_name)? {
        Conversion::CopyBgra8 => engine::copy_bgra8(&frame.plane)?,
        Conversion::DownsampleRotate => {
            let (width, height) = engine::PACKED_GRAY_SOURCE;
            let gray = frame.plane.reinterpret(PixelFormat::Gray8, width, height)?;
            engine::downsample_rotate(&gray)?
        }
        Conversion::Colorize(transform) => engine::colorize(&frame.plane, transform, tables)?,
    };
    Ok(bitmap)
}
