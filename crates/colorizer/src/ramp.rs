//! Color ramp interpolation.

use frame_common::Bgra;
use thiserror::Error;

/// Anchor colors of the standard heat ramp, written down in A,R,G,B order.
const HEAT_ANCHORS: [Bgra; 9] = [
    Bgra::from_argb(0xFF, 0x7F, 0x00, 0x00),
    Bgra::from_argb(0xFF, 0xFF, 0x00, 0x00),
    Bgra::from_argb(0xFF, 0xFF, 0x7F, 0x00),
    Bgra::from_argb(0xFF, 0xFF, 0xFF, 0x00),
    Bgra::from_argb(0xFF, 0x7F, 0xFF, 0x7F),
    Bgra::from_argb(0xFF, 0x00, 0xFF, 0xFF),
    Bgra::from_argb(0xFF, 0x00, 0x7F, 0xFF),
    Bgra::from_argb(0xFF, 0x00, 0x00, 0xFF),
    Bgra::from_argb(0xFF, 0x00, 0x00, 0x7F),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("a color ramp needs at least two anchors, got {0}")]
    TooFewAnchors(usize),
}

/// An ordered table of anchor colors with linear interpolation between them.
#[derive(Debug, Clone)]
pub struct ColorRamp {
    anchors: Vec<Bgra>,
}

impl ColorRamp {
    pub fn new(anchors: Vec<Bgra>) -> Result<Self, RampError> {
        if anchors.len() < 2 {
            return Err(RampError::TooFewAnchors(anchors.len()));
        }
        Ok(Self { anchors })
    }

    /// The standard heat ramp used for depth and infrared pseudo-color.
    pub fn heat() -> Self {
        Self {
            anchors: HEAT_ANCHORS.to_vec(),
        }
    }

    pub fn anchors(&self) -> &[Bgra] {
        &self.anchors
    }

    /// Interpolated color for a normalized value; inputs outside [0,1] clamp.
    ///
    /// Blending runs in integer 0..255 weight space, so a channel can never
    /// overshoot its two bracketing anchors.
    pub fn sample(&self, value: f32) -> Bgra {
        let value = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 1.0)
        };
        let steps = self.anchors.len() - 1;
        let scaled = value * steps as f32;
        let whole = scaled as usize;
        let index = whole.min(steps - 1);
        let prev = self.anchors[index];
        let next = self.anchors[index + 1];

        let weight = ((scaled - whole as f32) * 255.0) as u32;
        let inverse = 255 - weight;
        let mix = |p: u8, n: u8| ((u32::from(p) * inverse + u32::from(n) * weight + 127) / 255) as u8;
        Bgra {
            b: mix(prev.b, next.b),
            g: mix(prev.g, next.g),
            r: mix(prev.r, next.r),
            a: mix(prev.a, next.a),
        }
    }
}
