use crate::error::{ChartError, Result};
use crate::rendering::primitives::Point;
use crate::zodiac::{ZodiacSign, ALL_SIGNS};
use serde::{Deserialize, Serialize};

/// Inner edge of the zodiac band.
pub const INNER_RING_RATIO: f32 = 0.75;
/// Center medallion.
pub const MEDALLION_RATIO: f32 = 0.38;
/// Where sign glyphs sit, inside the zodiac band.
pub const SIGN_GLYPH_RATIO: f32 = 0.87;
/// Planet disc, at rest and while hovered or focused.
pub const PLANET_DISC_RATIO: f32 = 0.05;
pub const PLANET_DISC_ACTIVE_RATIO: f32 = 0.065;

/// Canvas frame for one render: square canvas, centered disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    /// Outer ring radius in pixels.
    pub radius: f32,
}

impl WheelGeometry {
    /// Frame for a container of the given width. Height always matches.
    pub fn for_width(width: f32, padding: f32) -> Result<Self> {
        if !width.is_finite() || width <= 2.0 * padding || padding < 0.0 {
            return Err(ChartError::InvalidWidth(width));
        }
        let height = width;
        Ok(Self {
            width,
            height,
            center: Point {
                x: width / 2.0,
                y: height / 2.0,
            },
            radius: width.min(height) / 2.0 - padding,
        })
    }

    pub fn inner_radius(&self) -> f32 {
        self.radius * INNER_RING_RATIO
    }
}

/// One 30° zodiac band segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignSegment {
    pub sign: ZodiacSign,
    /// Canvas angles in degrees; Aries starts at 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
}

impl SignSegment {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// The twelve fixed segments of the zodiac band.
pub fn sign_segments() -> Vec<SignSegment> {
    ALL_SIGNS
        .iter()
        .map(|sign| {
            let start = sign.index() as f64 * 30.0 - 90.0;
            SignSegment {
                sign: *sign,
                start_angle: start,
                end_angle: start + 30.0,
            }
        })
        .collect()
}

/// Angles of the twelve division lines between segments.
pub fn division_angles() -> impl Iterator<Item = f64> {
    (0..12).map(|i| i as f64 * 30.0)
}
