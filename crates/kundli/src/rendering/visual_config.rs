use crate::chart::{ChartStyle, Planet};
use crate::rendering::primitives::{Color, Stroke};
use crate::rendering::spec::LinearGradient;
use crate::zodiac::Element;

/// Gradient id referenced by the center medallion.
pub const MEDALLION_GRADIENT_ID: &str = "mysticGradient";
/// Filter id for the planet glow.
pub const GLOW_FILTER_ID: &str = "glow";

/// Fill and border of one planet's disc; also used by the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetColors {
    pub fill: Color,
    pub border: Color,
}

/// Fixed per-planet palette.
pub fn planet_colors(planet: Planet) -> PlanetColors {
    let (r, g, b) = match planet {
        Planet::Sun => (255, 152, 0),
        Planet::Moon => (158, 158, 158),
        Planet::Mercury => (76, 175, 80),
        Planet::Venus => (233, 30, 99),
        Planet::Mars => (244, 67, 54),
        Planet::Jupiter => (103, 58, 183),
        Planet::Saturn => (33, 150, 243),
        Planet::Rahu => (0, 0, 0),
        Planet::Ketu => (121, 85, 72),
    };
    let border = match planet {
        // Rahu's disc is black; its border is a near-black grey
        Planet::Rahu => Color::rgb(0x21, 0x21, 0x21),
        _ => Color::rgb(r, g, b),
    };
    PlanetColors {
        fill: Color::rgba(r, g, b, 0.6),
        border,
    }
}

/// Visual styling configuration for wheel elements
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Distance between the outer ring and the canvas edge, in pixels.
    pub padding: f32,
    pub outer_fill: Color,
    pub outer_stroke: Stroke,
    pub inner_fill: Color,
    pub inner_stroke: Stroke,
    /// Segment fill per element, in `Element::ALL` order.
    pub element_colors: [Color; 4],
    pub segment_stroke: Stroke,
    pub division_stroke: Stroke,
    pub medallion_stroke: Stroke,
    pub medallion_text_color: Color,
    pub sign_disc_color: Color,
    pub sign_glyph_color: Color,
    pub planet_symbol_color: Color,
    pub tooltip_background: Color,
    pub tooltip_border: Color,
    pub tooltip_text_color: Color,
    pub caption_color: Color,
}

impl Default for VisualConfig {
    fn default() -> Self {
        let faint = Color::rgba(0, 0, 0, 0.1);

        Self {
            padding: 15.0,
            outer_fill: Color::from_hex("#f5f0ff").unwrap_or(Color::WHITE),
            outer_stroke: Stroke::solid(Color::from_hex("#673ab7").unwrap_or(Color::BLACK), 15.0),
            inner_fill: Color::WHITE,
            inner_stroke: Stroke::solid(faint, 1.0),
            element_colors: [
                Color::rgba(255, 89, 94, 0.1),   // Fire - reddish
                Color::rgba(138, 201, 38, 0.1),  // Earth - greenish
                Color::rgba(255, 209, 102, 0.1), // Air - yellowish
                Color::rgba(25, 130, 196, 0.1),  // Water - bluish
            ],
            segment_stroke: Stroke::solid(faint, 0.5),
            division_stroke: Stroke::solid(faint, 1.0),
            medallion_stroke: Stroke::solid(Color::rgba(255, 255, 255, 0.5), 2.0),
            medallion_text_color: Color::WHITE,
            sign_disc_color: Color::rgba(255, 255, 255, 0.7),
            sign_glyph_color: Color::from_hex("#512da8").unwrap_or(Color::BLACK),
            planet_symbol_color: Color::from_hex("#333333").unwrap_or(Color::BLACK),
            tooltip_background: Color::rgba(0, 0, 0, 0.8),
            tooltip_border: Color::rgba(255, 255, 255, 0.3),
            tooltip_text_color: Color::WHITE,
            caption_color: Color::from_hex("#666666").unwrap_or(Color::BLACK),
        }
    }
}

impl VisualConfig {
    pub fn element_color(&self, element: Element) -> Color {
        let index = Element::ALL
            .iter()
            .position(|e| *e == element)
            .unwrap_or(0);
        self.element_colors[index]
    }

    /// Medallion gradient for a style: Western blue, KP orange, Vedic purple.
    pub fn medallion_gradient(&self, style: ChartStyle) -> LinearGradient {
        let (from, to) = match style {
            ChartStyle::Western => ("#2196F3", "#0D47A1"),
            ChartStyle::Kp => ("#FF5722", "#BF360C"),
            ChartStyle::NorthIndian | ChartStyle::SouthIndian => ("#673ab7", "#311b92"),
        };
        LinearGradient {
            id: MEDALLION_GRADIENT_ID.to_string(),
            from: Color::from_hex(from).unwrap_or(Color::BLACK),
            to: Color::from_hex(to).unwrap_or(Color::BLACK),
        }
    }
}
