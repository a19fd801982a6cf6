//! The interactive planet glyph.
//!
//! Each glyph owns its own hover/focus state; nothing else reads it and
//! toggling one glyph never affects another.

use crate::chart::Planet;
use crate::houses::House;
use crate::rendering::primitives::{Color, Point};
use serde::{Deserialize, Serialize};

/// Transient pointer/keyboard state of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlyphState {
    pub hovered: bool,
    pub focused: bool,
}

impl GlyphState {
    pub fn is_active(&self) -> bool {
        self.hovered || self.focused
    }
}

/// Tooltip box drawn above the glyph, hidden until the glyph is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub text: String,
    /// Offset of the box center from the glyph center.
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub font_size: f32,
    pub background: Color,
    pub border: Color,
    pub text_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetGlyph {
    pub planet: Planet,
    pub center: Point,
    pub symbol: String,
    pub radius: f32,
    pub active_radius: f32,
    pub fill: Color,
    pub border: Color,
    pub symbol_size: f32,
    pub symbol_color: Color,
    pub house: Option<House>,
    pub tooltip: Tooltip,
    #[serde(default)]
    pub state: GlyphState,
}

impl PlanetGlyph {
    pub fn hover(&mut self) {
        self.state.hovered = true;
    }

    pub fn unhover(&mut self) {
        self.state.hovered = false;
    }

    pub fn focus(&mut self) {
        self.state.focused = true;
    }

    pub fn blur(&mut self) {
        self.state.focused = false;
    }

    /// Disc radius for the current state.
    pub fn current_radius(&self) -> f32 {
        if self.state.is_active() {
            self.active_radius
        } else {
            self.radius
        }
    }

    pub fn tooltip_visible(&self) -> bool {
        self.state.is_active()
    }

    /// Enlargement applied while active, as a scale factor.
    pub fn active_scale(&self) -> f32 {
        if self.radius > 0.0 {
            self.active_radius / self.radius
        } else {
            1.0
        }
    }
}

/// Tooltip text: name, longitude to 0.1°, sign.
pub fn tooltip_text(planet: Planet, longitude: f64, sign_name: &str) -> String {
    format!("{} {:.1}° {}", planet.name(), longitude, sign_name)
}
