pub mod generator;
pub mod glyph;
pub mod legend;
pub mod primitives;
pub mod spec;
pub mod svg;
pub mod visual_config;

pub use generator::WheelCompositor;
pub use glyph::{GlyphState, PlanetGlyph, Tooltip};
pub use legend::{legend, render_legend_svg, LegendEntry};
pub use primitives::{Color, Paint, Point, Shape, Stroke, TextStyle};
pub use spec::{ChartSpec, Diagnostic};
pub use svg::render_svg;
pub use visual_config::{planet_colors, PlanetColors, VisualConfig};
