//! Precomputed color lookup tables.
//!
//! Converting a frame touches every pixel; interpolating the ramp per pixel
//! would dominate the cost. The tables bake interpolation in at build time,
//! so the per-pixel work is one rounded index into an immutable array that
//! any number of conversions may read concurrently.

use frame_common::Bgra;

use crate::ramp::ColorRamp;

/// Entries in the standing tables. 1024 buckets keeps quantization well
/// below one ramp step at 8-bit channel depth.
pub const LUT_SIZE: usize = 1024;

/// Exponent of the perceptual curve applied to infrared intensities.
const INFRARED_CURVE_EXPONENT: i32 = 12;

/// A fixed-size table of colors indexed by a normalized value.
#[derive(Debug, Clone)]
pub struct ColorLut {
    table: Vec<Bgra>,
}

impl ColorLut {
    /// Precompute `size` entries as `generator(index, size)`.
    pub fn build<F>(size: usize, generator: F) -> Self
    where
        F: Fn(usize, usize) -> Bgra,
    {
        assert!(size > 0, "lookup table needs at least one entry");
        let table = (0..size).map(|index| generator(index, size)).collect();
        Self { table }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Color for a normalized value; out-of-range and NaN inputs clamp.
    #[inline]
    pub fn sample(&self, value: f32) -> Bgra {
        let last = (self.table.len() - 1) as f32;
        let index = (value * last).round().clamp(0.0, last) as usize;
        self.table[index]
    }
}

/// The two standing pseudo-color tables, built once at pipeline startup and
/// shared read-only by every conversion.
#[derive(Debug, Clone)]
pub struct ColorTables {
    depth: ColorLut,
    infrared: ColorLut,
}

impl ColorTables {
    /// Build both tables from one ramp.
    ///
    /// The infrared generator compresses the ramp toward low intensities so
    /// near-black infrared returns stay distinguishable instead of all
    /// collapsing onto the same hue.
    pub fn new(ramp: &ColorRamp) -> Self {
        let depth = ColorLut::build(LUT_SIZE, |index, size| {
            ramp.sample(index as f32 / size as f32)
        });
        let infrared = ColorLut::build(LUT_SIZE, |index, size| {
            let value = index as f32 / size as f32;
            ramp.sample((1.0 - value).powi(INFRARED_CURVE_EXPONENT))
        });
        Self { depth, infrared }
    }

    /// Pseudo-color for a normalized depth value.
    #[inline]
    pub fn depth_color(&self, value: f32) -> Bgra {
        self.depth.sample(value)
    }

    /// Pseudo-color for a normalized infrared intensity.
    #[inline]
    pub fn infrared_color(&self, value: f32) -> Bgra {
        self.infrared.sample(value)
    }

    pub fn depth_table(&self) -> &ColorLut {
        &self.depth
    }

    pub fn infrared_table(&self) -> &ColorLut {
        &self.infrared
    }
}

impl Default for ColorTables {
    fn default() -> Self {
        Self::new(&ColorRamp::heat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(index: usize, size: usize) -> Bgra {
        Bgra::from_argb(0xFF, (index * 255 / (size - 1)) as u8, 0, 0)
    }

    #[test]
    fn test_boundary_exactness() {
        let lut = ColorLut::build(16, generator);
        assert_eq!(lut.sample(0.0), generator(0, 16));
        assert_eq!(lut.sample(1.0), generator(15, 16));
    }

    #[test]
    fn test_query_rounds_to_nearest_bucket() {
        let lut = ColorLut::build(3, generator);
        // last = 2; 0.24 * 2 = 0.48 rounds down, 0.26 * 2 = 0.52 rounds up.
        assert_eq!(lut.sample(0.24), generator(0, 3));
        assert_eq!(lut.sample(0.26), generator(1, 3));
    }

    #[test]
    fn test_query_clamps() {
        let lut = ColorLut::build(8, generator);
        assert_eq!(lut.sample(-1.0), generator(0, 8));
        assert_eq!(lut.sample(4.5), generator(7, 8));
        assert_eq!(lut.sample(f32::NAN), generator(0, 8));
    }

    #[test]
    fn test_standing_tables_match_ramp() {
        let ramp = ColorRamp::heat();
        let tables = ColorTables::new(&ramp);
        assert_eq!(tables.depth_table().len(), LUT_SIZE);
        assert_eq!(tables.infrared_table().len(), LUT_SIZE);
        assert_eq!(tables.depth_color(0.0), ramp.sample(0.0));
        // Full infrared intensity maps through the curve's low end.
        let expected = ramp.sample((1.0 - 1023.0 / 1024.0_f32).powi(12));
        assert_eq!(tables.infrared_color(1.0), expected);
    }
}
