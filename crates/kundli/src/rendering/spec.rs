use crate::chart::{ChartStyle, Planet};
use crate::rendering::glyph::PlanetGlyph;
use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// Two-stop diagonal gradient, top-left to bottom-right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub id: String,
    pub from: Color,
    pub to: Color,
}

/// Soft glow applied to planet discs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlowFilter {
    pub id: String,
    pub std_deviation: f32,
}

/// Reusable paint servers and filters referenced by shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defs {
    pub gradient: LinearGradient,
    pub glow: GlowFilter,
}

/// Layer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMetadata {
    pub id: String,
    /// Number of shapes in this layer.
    pub shape_count: usize,
}

/// Something that was left off the drawing, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub planet: Planet,
    pub message: String,
}

/// Chart specification - declarative description of the wheel to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub radius: f32,
    pub style: ChartStyle,
    pub defs: Defs,
    /// Back to front.
    pub shapes: Vec<Shape>,
    pub layers: Vec<LayerMetadata>,
    #[serde(default)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ChartSpec {
    pub fn glyphs(&self) -> impl Iterator<Item = &PlanetGlyph> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::PlanetGlyph(glyph) => Some(glyph),
            _ => None,
        })
    }

    pub fn glyph(&self, planet: Planet) -> Option<&PlanetGlyph> {
        self.glyphs().find(|g| g.planet == planet)
    }

    pub fn glyph_mut(&mut self, planet: Planet) -> Option<&mut PlanetGlyph> {
        self.shapes.iter_mut().find_map(|shape| match shape {
            Shape::PlanetGlyph(glyph) if glyph.planet == planet => Some(glyph),
            _ => None,
        })
    }

    /// Shapes of one named layer, if present.
    pub fn layer_shapes(&self, id: &str) -> Option<&[Shape]> {
        let mut start = 0;
        for layer in &self.layers {
            let end = start + layer.shape_count;
            if layer.id == id {
                return self.shapes.get(start..end);
            }
            start = end;
        }
        None
    }
}
