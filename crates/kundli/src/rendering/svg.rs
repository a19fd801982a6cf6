//! Serializes a [`ChartSpec`] to a standalone SVG document.
//!
//! Hover and focus are expressed in CSS so the document stays interactive
//! without script; a glyph already marked active in its [`GlyphState`] is
//! written in its enlarged form.
//!
//! [`GlyphState`]: crate::rendering::glyph::GlyphState

use crate::rendering::glyph::PlanetGlyph;
use crate::rendering::primitives::{Baseline, Paint, Point, Shape, Stroke, TextAnchor, TextStyle};
use crate::rendering::spec::{ChartSpec, Defs};

const PLANET_BORDER_WIDTH: f32 = 2.0;
const TRANSITION_MS: u32 = 200;

pub fn render_svg(spec: &ChartSpec) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\" preserveAspectRatio=\"xMidYMid meet\">",
        w = spec.width,
        h = spec.height
    ));
    push_defs(&mut svg, &spec.defs);
    push_style(&mut svg, spec);

    for shape in &spec.shapes {
        push_shape(&mut svg, shape, &spec.defs);
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_defs(svg: &mut String, defs: &Defs) {
    svg.push_str("<defs>");
    svg.push_str(&format!(
        "<filter id=\"{}\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">\
         <feGaussianBlur stdDeviation=\"{}\" result=\"blur\"/>\
         <feComposite in=\"SourceGraphic\" in2=\"blur\" operator=\"over\"/></filter>",
        escape_xml(&defs.glow.id),
        defs.glow.std_deviation
    ));
    svg.push_str(&format!(
        "<linearGradient id=\"{}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
         <stop offset=\"0%\" stop-color=\"{}\"/><stop offset=\"100%\" stop-color=\"{}\"/></linearGradient>",
        escape_xml(&defs.gradient.id),
        defs.gradient.from.to_css_string(),
        defs.gradient.to.to_css_string()
    ));
    svg.push_str("</defs>");
}

fn push_style(svg: &mut String, spec: &ChartSpec) {
    let scale = spec.glyphs().next().map(|g| g.active_scale()).unwrap_or(1.0);
    svg.push_str(&format!(
        "<style>\
         .planet{{cursor:pointer;outline:none}}\
         .planet .tooltip{{opacity:0;transition:opacity {t}ms}}\
         .planet .disc{{transition:transform {t}ms}}\
         .planet:hover .tooltip,.planet:focus .tooltip,.planet.active .tooltip{{opacity:1}}\
         .planet:not(.active):hover .disc,.planet:not(.active):focus .disc{{transform:scale({s:.3})}}\
         </style>",
        t = TRANSITION_MS,
        s = scale
    ));
}

fn push_shape(svg: &mut String, shape: &Shape, defs: &Defs) {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"{}/>",
                center.x,
                center.y,
                radius,
                fill.as_ref().map(paint_attr).unwrap_or_else(|| "none".to_string()),
                stroke_attrs(stroke.as_ref())
            ));
        }
        Shape::Line { from, to, stroke } => {
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"{}/>",
                from.x,
                from.y,
                to.x,
                to.y,
                stroke_attrs(Some(stroke))
            ));
        }
        Shape::Text {
            position,
            content,
            style,
        } => push_text(svg, *position, content, style),
        Shape::SignSegment {
            center,
            sign_index,
            start_angle,
            end_angle,
            radius_inner,
            radius_outer,
            fill,
            stroke,
        } => {
            let d = annular_wedge_path(*center, *radius_inner, *radius_outer, *start_angle, *end_angle);
            svg.push_str(&format!(
                "<path class=\"sign sign-{}\" d=\"{}\" fill=\"{}\"{}/>",
                sign_index,
                d,
                fill.to_css_string(),
                stroke_attrs(stroke.as_ref())
            ));
        }
        Shape::PlanetGlyph(glyph) => push_planet(svg, glyph, defs),
    }
}

fn push_planet(svg: &mut String, glyph: &PlanetGlyph, defs: &Defs) {
    let class = if glyph.state.is_active() {
        "planet active"
    } else {
        "planet"
    };
    svg.push_str(&format!(
        "<g class=\"{}\" data-planet=\"{}\" tabindex=\"0\" transform=\"translate({:.2}, {:.2})\">",
        class,
        glyph.planet.name(),
        glyph.center.x,
        glyph.center.y
    ));
    svg.push_str(&format!("<title>{}</title>", escape_xml(&glyph.tooltip.text)));
    svg.push_str(&format!(
        "<circle class=\"disc\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" filter=\"url(#{})\"/>",
        glyph.current_radius(),
        glyph.fill.to_css_string(),
        glyph.border.to_css_string(),
        PLANET_BORDER_WIDTH,
        escape_xml(&defs.glow.id)
    ));
    let symbol_style = TextStyle::centered(glyph.symbol_size, glyph.symbol_color)
        .bold()
        .central();
    push_text(svg, Point { x: 0.0, y: 0.0 }, &glyph.symbol, &symbol_style);

    let tooltip = &glyph.tooltip;
    svg.push_str(&format!(
        "<g class=\"tooltip\" transform=\"translate(0, {:.2})\">",
        tooltip.offset_y
    ));
    svg.push_str(&format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        -tooltip.width / 2.0,
        -tooltip.height,
        tooltip.width,
        tooltip.height,
        tooltip.corner_radius,
        tooltip.background.to_css_string(),
        tooltip.border.to_css_string()
    ));
    push_text(
        svg,
        Point { x: 0.0, y: 0.0 },
        &tooltip.text,
        &TextStyle::centered(tooltip.font_size, tooltip.text_color).shifted(-0.2),
    );
    svg.push_str("</g></g>");
}

fn push_text(svg: &mut String, position: Point, content: &str, style: &TextStyle) {
    let anchor = match style.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let mut attrs = format!(
        "x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\" font-size=\"{:.2}\" fill=\"{}\"",
        position.x,
        position.y,
        anchor,
        style.size,
        style.color.to_css_string()
    );
    if style.baseline == Baseline::Central {
        attrs.push_str(" dominant-baseline=\"central\"");
    }
    if style.dy_em != 0.0 {
        attrs.push_str(&format!(" dy=\"{}em\"", style.dy_em));
    }
    if style.bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if style.italic {
        attrs.push_str(" font-style=\"italic\"");
    }
    svg.push_str(&format!("<text {}>{}</text>", attrs, escape_xml(content)));
}

fn paint_attr(paint: &Paint) -> String {
    match paint {
        Paint::Solid(color) => color.to_css_string(),
        Paint::Gradient(id) => format!("url(#{})", escape_xml(id)),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(stroke) = stroke else {
        return String::new();
    };
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color.to_css_string(),
        stroke.width
    );
    if let Some(dashes) = &stroke.dash_array {
        let joined: Vec<String> = dashes.iter().map(|d| d.to_string()).collect();
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", joined.join(" ")));
    }
    attrs
}

/// Closed path for the band between two radii and two canvas angles.
pub(crate) fn annular_wedge_path(
    center: Point,
    radius_inner: f32,
    radius_outer: f32,
    start_angle: f32,
    end_angle: f32,
) -> String {
    let point = |radius: f32, degrees: f32| {
        let radians = degrees.to_radians();
        (
            center.x + radius * radians.cos(),
            center.y + radius * radians.sin(),
        )
    };
    let large_arc = if (end_angle - start_angle).abs() > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = point(radius_outer, start_angle);
    let (ox2, oy2) = point(radius_outer, end_angle);
    let (ix2, iy2) = point(radius_inner, end_angle);
    let (ix1, iy1) = point(radius_inner, start_angle);

    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        ox1, oy1, radius_outer, radius_outer, large_arc, ox2, oy2, ix2, iy2, radius_inner,
        radius_inner, large_arc, ix1, iy1
    )
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_wedge_path_starts_at_outer_edge() {
        let center = Point { x: 100.0, y: 100.0 };
        let d = annular_wedge_path(center, 75.0, 100.0, -90.0, -60.0);
        assert!(d.starts_with("M 100.00 0.00 A 100.00 100.00 0 0 1"));
        assert!(d.ends_with("Z"));
    }
}
