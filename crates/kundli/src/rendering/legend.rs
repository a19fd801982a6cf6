use crate::chart::Planet;
use crate::rendering::primitives::Color;
use crate::rendering::svg::escape_xml;
use crate::rendering::visual_config::planet_colors;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub planet: Planet,
    pub glyph: &'static str,
    pub fill: Color,
    pub border: Color,
}

/// One entry per planet, in canonical order.
pub fn legend() -> Vec<LegendEntry> {
    Planet::ALL
        .iter()
        .map(|planet| {
            let colors = planet_colors(*planet);
            LegendEntry {
                planet: *planet,
                glyph: planet.glyph(),
                fill: colors.fill,
                border: colors.border,
            }
        })
        .collect()
}

/// Horizontal legend strip: a swatch, glyph and name per planet.
pub fn render_legend_svg(entries: &[LegendEntry], width: f32) -> String {
    let columns = 3usize;
    let row_height = 24.0_f32;
    let rows = entries.len().div_ceil(columns);
    let height = rows as f32 * row_height + 8.0;
    let column_width = width / columns as f32;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\">",
        w = width,
        h = height
    ));
    for (i, entry) in entries.iter().enumerate() {
        let x = (i % columns) as f32 * column_width + 12.0;
        let y = (i / columns) as f32 * row_height + row_height / 2.0 + 4.0;
        svg.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"8\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>",
            x,
            y,
            entry.fill.to_css_string(),
            entry.border.to_hex()
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"10\" fill=\"#333\">{}</text>",
            x,
            y,
            escape_xml(entry.glyph)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" dominant-baseline=\"central\" font-size=\"12\" fill=\"#333\">{}</text>",
            x + 14.0,
            y,
            escape_xml(entry.planet.name())
        ));
    }
    svg.push_str("</svg>\n");
    svg
}
