//! Per-row conversion of raw samples into BGRA pixels.

use frame_common::{Bgra, PixelFormat};
use serde::{Deserialize, Serialize};

use crate::lut::ColorTables;

/// Pixel emitted for samples carrying no usable signal: the sensor reported
/// zero, or a reading past the reliable ceiling.
pub const NO_SIGNAL: Bgra = Bgra {
    b: 0x7F,
    g: 0x00,
    r: 0x00,
    a: 0xFF,
};

/// Highest raw depth reading the sensor resolves reliably. Larger values
/// show up when depth could not be calculated, e.g. objects too close.
pub const DEPTH_RAW_CEILING: u16 = 4000;

/// Sensor identity that selects the long-range calibration preset.
pub const LONG_THROW_SENSOR: &str = "Long Throw ToF Depth";

/// Scale and reliable range for mapping raw depth samples to meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthCalibration {
    /// Meters per raw unit.
    pub depth_scale: f32,
    /// Nearest depth the sensor resolves reliably, in meters.
    pub min_reliable: f32,
    /// Farthest depth the sensor resolves reliably, in meters.
    pub max_reliable: f32,
}

impl DepthCalibration {
    /// Preset for the long-throw time-of-flight sensor.
    pub const fn long_throw() -> Self {
        Self {
            depth_scale: 1.0 / 1000.0,
            min_reliable: 0.5,
            max_reliable: 4.0,
        }
    }

    /// Preset for short-range depth sensors.
    pub const fn short_throw() -> Self {
        Self {
            depth_scale: 1.0 / 1000.0,
            min_reliable: 0.2,
            max_reliable: 1.0,
        }
    }

    /// Preset selected by sensor identity string.
    pub fn for_sensor(sensor_name: &str) -> Self {
        if sensor_name == LONG_THROW_SENSOR {
            Self::long_throw()
        } else {
            Self::short_throw()
        }
    }
}

/// One row conversion, tagged with its numeric parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowTransform {
    /// 16-bit depth samples through the depth table.
    Depth(DepthCalibration),
    /// 16-bit infrared samples through the infrared table.
    Infrared16,
    /// 8-bit infrared samples through the infrared table.
    Infrared8,
}

impl RowTransform {
    /// The raw pixel format this transform reads.
    pub fn input_format(&self) -> PixelFormat {
        match self {
            RowTransform::Depth(_) | RowTransform::Infrared16 => PixelFormat::Gray16,
            RowTransform::Infrared8 => PixelFormat::Gray8,
        }
    }

    /// Convert one scanline of `width` samples into `width` BGRA pixels.
    ///
    /// `input` holds at least the packed samples of one row; `output`
    /// receives `width * 4` bytes.
    pub fn convert_row(&self, tables: &ColorTables, width: usize, input: &[u8], output: &mut [u8]) {
        match *self {
            RowTransform::Depth(cal) => depth_row(tables, cal, width, input, output),
            RowTransform::Infrared16 => infrared16_row(tables, width, input, output),
            RowTransform::Infrared8 => infrared8_row(tables, width, input, output),
        }
    }
}

fn depth_row(
    tables: &ColorTables,
    cal: DepthCalibration,
    width: usize,
    input: &[u8],
    output: &mut [u8],
) {
    let range_reciprocal = 1.0 / (cal.max_reliable - cal.min_reliable);
    for x in 0..width {
        let sample = u16::from_le_bytes([input[2 * x], input[2 * x + 1]]);
        let color = if sample == 0 || sample > DEPTH_RAW_CEILING {
            NO_SIGNAL
        } else {
            let depth = f32::from(sample) * cal.depth_scale;
            tables.depth_color((depth - cal.min_reliable) * range_reciprocal)
        };
        color.write_to(&mut output[4 * x..4 * x + 4]);
    }
}

fn infrared16_row(tables: &ColorTables, width: usize, input: &[u8], output: &mut [u8]) {
    let range_reciprocal = 1.0 / f32::from(u16::MAX);
    for x in 0..width {
        let sample = u16::from_le_bytes([input[2 * x], input[2 * x + 1]]);
        let color = if sample == 0 {
            NO_SIGNAL
        } else {
            tables.infrared_color(f32::from(sample) * range_reciprocal)
        };
        color.write_to(&mut output[4 * x..4 * x + 4]);
    }
}

fn infrared8_row(tables: &ColorTables, width: usize, input: &[u8], output: &mut [u8]) {
    let range_reciprocal = 1.0 / f32::from(u8::MAX);
    for x in 0..width {
        let color = if input[x] == 0 {
            NO_SIGNAL
        } else {
            tables.infrared_color(f32::from(input[x]) * range_reciprocal)
        };
        color.write_to(&mut output[4 * x..4 * x + 4]);
    }
}
