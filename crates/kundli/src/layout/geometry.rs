//! Planet placement on the wheel, one strategy per chart style.
//!
//! Angles are in canvas convention: 0 at 3 o'clock, increasing with the
//! canvas y axis. Radii are fractions of the outer ring radius.

use crate::chart::{Chart, ChartStyle, Placed, Planet, PlanetPosition};
use crate::houses::planet_house;
use crate::rendering::primitives::Point;
use serde::{Deserialize, Serialize};

/// Normalized polar coordinates of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPosition {
    pub angle_radians: f64,
    pub radius_fraction: f64,
}

impl PolarPosition {
    pub fn angle_degrees(&self) -> f64 {
        self.angle_radians.to_degrees()
    }

    /// Pixel position for a wheel of `radius` centered at `center`.
    pub fn to_canvas(&self, center: Point, radius: f32) -> Point {
        polar_to_cartesian(center, radius * self.radius_fraction as f32, self.angle_radians)
    }
}

/// Fixed radial offset per body so that bodies at similar longitudes do
/// not sit on top of each other.
pub const fn distance_factor(planet: Planet) -> f64 {
    match planet {
        Planet::Sun => 0.50,
        Planet::Moon => 0.57,
        Planet::Mercury => 0.64,
        Planet::Venus => 0.52,
        Planet::Mars => 0.69,
        Planet::Jupiter => 0.61,
        Planet::Saturn => 0.66,
        Planet::Rahu => 0.73,
        Planet::Ketu => 0.55,
    }
}

/// Resolve where a planet is drawn under the chart's style.
///
/// Returns `None` when the style needs a house and the planet's (or the
/// ascendant's) sign cannot be resolved; such planets are not drawn.
pub fn position_of(position: &PlanetPosition, chart: &Chart) -> Option<PolarPosition> {
    let angle_degrees = match chart.style {
        ChartStyle::NorthIndian => position.longitude - 90.0,
        ChartStyle::SouthIndian => {
            let house = planet_house(chart, position)?;
            (house.number() as f64 - 1.0) * 30.0 + 15.0 - 90.0
        }
        ChartStyle::Western | ChartStyle::Kp => {
            let relative = (position.longitude - chart.ascendant.longitude() + 360.0) % 360.0;
            (relative + 270.0) % 360.0
        }
    };

    Some(PolarPosition {
        angle_radians: angle_degrees.to_radians(),
        radius_fraction: distance_factor(position.planet),
    })
}

/// Polar to canvas coordinates.
pub fn polar_to_cartesian(center: Point, radius: f32, angle_radians: f64) -> Point {
    Point {
        x: center.x + radius * angle_radians.cos() as f32,
        y: center.y + radius * angle_radians.sin() as f32,
    }
}
