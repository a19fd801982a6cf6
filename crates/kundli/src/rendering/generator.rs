use crate::chart::{Chart, Placed, PlanetPosition};
use crate::error::Result;
use crate::houses::planet_house;
use crate::layout::geometry::{polar_to_cartesian, position_of};
use crate::layout::rings::{
    division_angles, sign_segments, WheelGeometry, MEDALLION_RATIO, PLANET_DISC_ACTIVE_RATIO,
    PLANET_DISC_RATIO, SIGN_GLYPH_RATIO,
};
use crate::rendering::glyph::{tooltip_text, GlyphState, PlanetGlyph, Tooltip};
use crate::rendering::primitives::{Paint, Point, Shape, TextStyle};
use crate::rendering::spec::{ChartSpec, Defs, Diagnostic, GlowFilter, LayerMetadata};
use crate::rendering::visual_config::{planet_colors, VisualConfig, GLOW_FILTER_ID};

/// Builds the complete wheel drawing for a chart.
///
/// Output depends only on the chart and the canvas width; every call
/// produces a fresh drawing.
pub struct WheelCompositor {
    visual_config: VisualConfig,
}

impl Default for WheelCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelCompositor {
    /// Create a new compositor with the default look
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
        }
    }

    pub fn with_config(visual_config: VisualConfig) -> Self {
        Self { visual_config }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    /// Generate the wheel for `chart` on a square canvas `width` pixels wide.
    pub fn generate(&self, chart: &Chart, width: f32) -> Result<ChartSpec> {
        let geometry = WheelGeometry::for_width(width, self.visual_config.padding)?;
        let mut diagnostics = Vec::new();

        let layers: Vec<(&str, Vec<Shape>)> = vec![
            ("rings", self.ring_shapes(&geometry)),
            ("zodiac", self.zodiac_shapes(&geometry)),
            ("medallion", self.medallion_shapes(chart, &geometry)),
            ("sign-glyphs", self.sign_glyph_shapes(&geometry)),
            (
                "planets",
                self.planet_shapes(chart, &geometry, &mut diagnostics),
            ),
            ("caption", self.caption_shapes(chart, &geometry)),
        ];

        let mut shapes = Vec::new();
        let mut metadata = Vec::with_capacity(layers.len());
        for (id, layer) in layers {
            metadata.push(LayerMetadata {
                id: id.to_string(),
                shape_count: layer.len(),
            });
            shapes.extend(layer);
        }

        log::debug!(
            "Composed {} wheel: width={} shapes={} skipped={}",
            chart.style.tag(),
            width,
            shapes.len(),
            diagnostics.len()
        );

        Ok(ChartSpec {
            width: geometry.width,
            height: geometry.height,
            center: geometry.center,
            radius: geometry.radius,
            style: chart.style,
            defs: Defs {
                gradient: self.visual_config.medallion_gradient(chart.style),
                glow: GlowFilter {
                    id: GLOW_FILTER_ID.to_string(),
                    std_deviation: 2.0,
                },
            },
            shapes,
            layers: metadata,
            diagnostics,
        })
    }

    fn ring_shapes(&self, geometry: &WheelGeometry) -> Vec<Shape> {
        let vc = &self.visual_config;
        vec![
            Shape::Circle {
                center: geometry.center,
                radius: geometry.radius,
                fill: Some(Paint::Solid(vc.outer_fill)),
                stroke: Some(vc.outer_stroke.clone()),
            },
            Shape::Circle {
                center: geometry.center,
                radius: geometry.inner_radius(),
                fill: Some(Paint::Solid(vc.inner_fill)),
                stroke: Some(vc.inner_stroke.clone()),
            },
        ]
    }

    fn zodiac_shapes(&self, geometry: &WheelGeometry) -> Vec<Shape> {
        let vc = &self.visual_config;
        let mut shapes: Vec<Shape> = sign_segments()
            .into_iter()
            .map(|segment| Shape::SignSegment {
                center: geometry.center,
                sign_index: segment.sign.index() as u8,
                start_angle: segment.start_angle as f32,
                end_angle: segment.end_angle as f32,
                radius_inner: geometry.inner_radius(),
                radius_outer: geometry.radius,
                fill: vc.element_color(segment.sign.element()),
                stroke: Some(vc.segment_stroke.clone()),
            })
            .collect();

        for angle in division_angles() {
            let radians = angle.to_radians();
            shapes.push(Shape::Line {
                from: polar_to_cartesian(geometry.center, geometry.inner_radius(), radians),
                to: polar_to_cartesian(geometry.center, geometry.radius, radians),
                stroke: vc.division_stroke.clone(),
            });
        }
        shapes
    }

    fn medallion_shapes(&self, chart: &Chart, geometry: &WheelGeometry) -> Vec<Shape> {
        let vc = &self.visual_config;
        let r = geometry.radius;
        let asc = &chart.ascendant;
        // An unknown sign name still prints; only the glyph goes blank
        let glyph = asc.sign().map(|s| s.glyph()).unwrap_or_default();

        vec![
            Shape::Circle {
                center: geometry.center,
                radius: r * MEDALLION_RATIO,
                fill: Some(Paint::Gradient(vc.medallion_gradient(chart.style).id)),
                stroke: Some(vc.medallion_stroke.clone()),
            },
            Shape::Text {
                position: geometry.center,
                content: glyph.to_string(),
                style: TextStyle::centered(r * 0.18, vc.medallion_text_color).shifted(-0.2),
            },
            Shape::Text {
                position: geometry.center,
                content: asc.rashi.name.clone(),
                style: TextStyle::centered(r * 0.09, vc.medallion_text_color)
                    .bold()
                    .shifted(0.8),
            },
            Shape::Text {
                position: geometry.center,
                content: "Ascendant".to_string(),
                style: TextStyle::centered(r * 0.06, vc.medallion_text_color).shifted(2.0),
            },
        ]
    }

    fn sign_glyph_shapes(&self, geometry: &WheelGeometry) -> Vec<Shape> {
        let vc = &self.visual_config;
        let r = geometry.radius;
        let mut shapes = Vec::with_capacity(24);

        for segment in sign_segments() {
            let position =
                polar_to_cartesian(geometry.center, r * SIGN_GLYPH_RATIO, segment.mid_angle().to_radians());
            shapes.push(Shape::Circle {
                center: position,
                radius: r * 0.035,
                fill: Some(Paint::Solid(vc.sign_disc_color)),
                stroke: None,
            });
            shapes.push(Shape::Text {
                position,
                content: segment.sign.glyph().to_string(),
                style: TextStyle::centered(r * 0.045, vc.sign_glyph_color)
                    .bold()
                    .central(),
            });
        }
        shapes
    }

    fn planet_shapes(
        &self,
        chart: &Chart,
        geometry: &WheelGeometry,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Shape> {
        let mut shapes = Vec::new();

        for position in chart.positions() {
            // A planet whose sign cannot be resolved has no trustworthy
            // placement in any style, so it is left off the wheel.
            if position.sign().is_none() {
                let message = format!(
                    "unknown sign {:?}, planet not drawn",
                    position.rashi.name
                );
                log::warn!("{}: {}", position.planet, message);
                diagnostics.push(Diagnostic {
                    planet: position.planet,
                    message,
                });
                continue;
            }

            match position_of(position, chart) {
                Some(polar) => {
                    let center = polar.to_canvas(geometry.center, geometry.radius);
                    shapes.push(Shape::PlanetGlyph(self.planet_glyph(
                        chart, position, center, geometry,
                    )));
                }
                None => {
                    let message = format!(
                        "house indeterminate for ascendant {:?}, planet not drawn",
                        chart.ascendant.rashi.name
                    );
                    log::warn!("{}: {}", position.planet, message);
                    diagnostics.push(Diagnostic {
                        planet: position.planet,
                        message,
                    });
                }
            }
        }
        shapes
    }

    fn planet_glyph(
        &self,
        chart: &Chart,
        position: &PlanetPosition,
        center: Point,
        geometry: &WheelGeometry,
    ) -> PlanetGlyph {
        let vc = &self.visual_config;
        let r = geometry.radius;
        let colors = planet_colors(position.planet);

        PlanetGlyph {
            planet: position.planet,
            center,
            symbol: position.planet.glyph().to_string(),
            radius: r * PLANET_DISC_RATIO,
            active_radius: r * PLANET_DISC_ACTIVE_RATIO,
            fill: colors.fill,
            border: colors.border,
            symbol_size: r * 0.07,
            symbol_color: vc.planet_symbol_color,
            house: planet_house(chart, position),
            tooltip: Tooltip {
                text: tooltip_text(position.planet, position.longitude, &position.rashi.name),
                offset_y: -r * 0.15,
                width: r * 0.4,
                height: r * 0.08,
                corner_radius: 5.0,
                font_size: r * 0.033,
                background: vc.tooltip_background,
                border: vc.tooltip_border,
                text_color: vc.tooltip_text_color,
            },
            state: GlyphState::default(),
        }
    }

    fn caption_shapes(&self, chart: &Chart, geometry: &WheelGeometry) -> Vec<Shape> {
        vec![Shape::Text {
            position: Point {
                x: geometry.center.x,
                y: geometry.height - 5.0,
            },
            content: chart.style.display_name().to_string(),
            style: TextStyle::centered(geometry.radius * 0.06, self.visual_config.caption_color)
                .italic(),
        }]
    }
}
