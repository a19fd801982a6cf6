use crate::rendering::glyph::PlanetGlyph;
use serde::{Deserialize, Serialize};

/// Point in 2D canvas space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Color with a fractional opacity in [0, 1].
    pub fn rgba(r: u8, g: u8, b: u8, opacity: f32) -> Self {
        let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color { r, g, b, a }
    }

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 6 {
            // RGB
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color { r, g, b, a: 255 })
        } else if hex.len() == 8 {
            // RGBA
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
            Some(Color { r, g, b, a })
        } else {
            None
        }
    }

    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Convert to CSS string
    pub fn to_css_string(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.opacity()
            )
        }
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fill paint: a flat color or a reference to a gradient in the drawing's defs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Paint {
    Solid(Color),
    Gradient(String),
}

/// Stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub dash_array: Option<Vec<f32>>,
}

impl Stroke {
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash_array: None,
        }
    }
}

/// Text anchor position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Central,
}

/// Font settings for a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub anchor: TextAnchor,
    #[serde(default)]
    pub baseline: Baseline,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    /// Vertical shift in em.
    #[serde(default)]
    pub dy_em: f32,
}

impl TextStyle {
    pub fn centered(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            anchor: TextAnchor::Middle,
            baseline: Baseline::Alphabetic,
            bold: false,
            italic: false,
            dy_em: 0.0,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn central(mut self) -> Self {
        self.baseline = Baseline::Central;
        self
    }

    pub fn shifted(mut self, dy_em: f32) -> Self {
        self.dy_em = dy_em;
        self
    }
}

/// Shape primitives for chart rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    Circle {
        center: Point,
        radius: f32,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        content: String,
        style: TextStyle,
    },
    SignSegment {
        center: Point,
        sign_index: u8, // 0-11
        start_angle: f32, // canvas degrees, 0 = 3 o'clock
        end_angle: f32,
        radius_inner: f32,
        radius_outer: f32,
        fill: Color,
        stroke: Option<Stroke>,
    },
    PlanetGlyph(PlanetGlyph),
}
