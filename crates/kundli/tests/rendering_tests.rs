use kundli::chart::{load_chart_from_json, ChartStyle, Planet};
use kundli::rendering::primitives::{Color, Paint, Point, Shape, Stroke, TextAnchor, TextStyle};
use kundli::rendering::{render_svg, ChartSpec, WheelCompositor};

const CHART_JSON: &str = include_str!("fixtures/chart_aries.json");

fn spec(style: ChartStyle, width: f32) -> ChartSpec {
    let chart = load_chart_from_json(CHART_JSON).unwrap().with_style(style);
    WheelCompositor::new().generate(&chart, width).unwrap()
}

#[test]
fn test_color_from_hex_rgb() {
    let color = Color::from_hex("#FF0000").unwrap();
    assert_eq!(color.r, 255);
    assert_eq!(color.g, 0);
    assert_eq!(color.b, 0);
    assert_eq!(color.a, 255);
}

#[test]
fn test_color_from_hex_invalid() {
    assert!(Color::from_hex("invalid").is_none());
    assert!(Color::from_hex("#FF").is_none());
    assert!(Color::from_hex("#FF00000").is_none());
}

#[test]
fn test_color_css_strings() {
    assert_eq!(Color::rgb(255, 0, 0).to_css_string(), "rgb(255, 0, 0)");
    let translucent = Color::rgba(255, 89, 94, 0.1);
    assert!(translucent.to_css_string().starts_with("rgba(255, 89, 94, 0.1"));
}

#[test]
fn test_shape_serialization_is_tagged() {
    let shape = Shape::Line {
        from: Point { x: 0.0, y: 0.0 },
        to: Point { x: 10.0, y: 10.0 },
        stroke: Stroke::solid(Color::BLACK, 1.0),
    };
    let json = serde_json::to_value(&shape).unwrap();
    assert_eq!(json["type"], "Line");

    let text = Shape::Text {
        position: Point { x: 1.0, y: 2.0 },
        content: "♈".to_string(),
        style: TextStyle::centered(12.0, Color::WHITE).bold(),
    };
    let back: Shape = serde_json::from_str(&serde_json::to_string(&text).unwrap()).unwrap();
    match back {
        Shape::Text { style, .. } => {
            assert_eq!(style.anchor, TextAnchor::Middle);
            assert!(style.bold);
        }
        other => panic!("Expected text, got {:?}", other),
    }
}

#[test]
fn test_canvas_frame() {
    let spec = spec(ChartStyle::NorthIndian, 500.0);
    assert_eq!(spec.width, 500.0);
    assert_eq!(spec.height, 500.0);
    assert_eq!(spec.radius, 235.0);
    assert_eq!(spec.center, Point { x: 250.0, y: 250.0 });
}

#[test]
fn test_rings_and_medallion() {
    let spec = spec(ChartStyle::Western, 500.0);
    match spec.layer_shapes("rings").unwrap() {
        [Shape::Circle { radius: outer, .. }, Shape::Circle { radius: inner, fill, .. }] => {
            assert_eq!(*outer, 235.0);
            assert_eq!(*inner, 235.0 * 0.75);
            assert_eq!(fill, &Some(Paint::Solid(Color::WHITE)));
        }
        other => panic!("unexpected ring layer: {:?}", other),
    }

    let medallion = spec.layer_shapes("medallion").unwrap();
    match &medallion[0] {
        Shape::Circle { radius, fill, .. } => {
            assert!((radius - 235.0 * 0.38).abs() < 1e-3);
            assert_eq!(fill, &Some(Paint::Gradient("mysticGradient".to_string())));
        }
        other => panic!("Expected medallion circle, got {:?}", other),
    }
    let texts: Vec<&str> = medallion
        .iter()
        .filter_map(|s| match s {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["♈", "Aries", "Ascendant"]);
    assert_eq!(spec.defs.gradient.from.to_hex(), "#2196f3");
}

#[test]
fn test_segments_colored_by_element() {
    let spec = spec(ChartStyle::NorthIndian, 500.0);
    let fills: Vec<Color> = spec
        .layer_shapes("zodiac")
        .unwrap()
        .iter()
        .filter_map(|s| match s {
            Shape::SignSegment { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 12);
    // Aries and Leo are both fire
    assert_eq!(fills[0], fills[4]);
    assert_ne!(fills[0], fills[1]);
    assert_eq!(fills[0], Color::rgba(255, 89, 94, 0.1));
}

#[test]
fn test_sun_glyph_position_and_tooltip() {
    let spec = spec(ChartStyle::NorthIndian, 500.0);
    let sun = spec.glyph(Planet::Sun).unwrap();
    let distance = 235.0_f32 * 0.5;
    let angle = 35.0_f32.to_radians();
    assert!((sun.center.x - (250.0 + distance * angle.cos())).abs() < 1e-3);
    assert!((sun.center.y - (250.0 + distance * angle.sin())).abs() < 1e-3);
    assert_eq!(sun.tooltip.text, "Sun 125.0° Leo");
    assert_eq!(sun.house.map(|h| h.number()), Some(5));
    assert!((sun.radius - 235.0 * 0.05).abs() < 1e-3);
    assert!((sun.active_radius - 235.0 * 0.065).abs() < 1e-3);
}

#[test]
fn test_deterministic_geometry() {
    for style in ChartStyle::ALL {
        assert_eq!(spec(style, 420.0), spec(style, 420.0));
    }
}

#[test]
fn test_width_scales_drawing() {
    let small = spec(ChartStyle::Kp, 300.0);
    let large = spec(ChartStyle::Kp, 600.0);
    assert_eq!(small.radius, 135.0);
    assert_eq!(large.radius, 285.0);
    assert_eq!(small.shapes.len(), large.shapes.len());
}

#[test]
fn test_skipped_planet_is_reported() {
    let json = CHART_JSON.replace("\"name\": \"Gemini\"", "\"name\": \"Twins\"");
    let chart = load_chart_from_json(&json).unwrap();
    for style in ChartStyle::ALL {
        let spec = WheelCompositor::new()
            .generate(&chart.with_style(style), 500.0)
            .unwrap();
        assert!(spec.glyph(Planet::Rahu).is_none());
        assert_eq!(spec.glyphs().count(), 8);
        assert_eq!(spec.diagnostics.len(), 1);
        assert_eq!(spec.diagnostics[0].planet, Planet::Rahu);
    }
}

#[test]
fn test_svg_document() {
    let spec = spec(ChartStyle::SouthIndian, 500.0);
    let svg = render_svg(&spec);
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 500.00 500.00\""));
    assert!(svg.contains("preserveAspectRatio=\"xMidYMid meet\""));
    assert!(svg.contains("<filter id=\"glow\""));
    assert!(svg.contains("<linearGradient id=\"mysticGradient\""));
    assert!(svg.contains(".planet:hover .tooltip"));
    assert!(svg.contains(".planet:focus .tooltip"));
    assert_eq!(svg.matches("class=\"planet\"").count(), 9);
    assert_eq!(svg.matches("<path class=\"sign").count(), 12);
    assert!(svg.contains(">Vedic (South Indian)</text>"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_svg_escapes_text() {
    let json = CHART_JSON.replacen("\"name\": \"Aries\", \"degree\": 5.0", "\"name\": \"<Aries&>\", \"degree\": 5.0", 1);
    let chart = load_chart_from_json(&json).unwrap();
    let svg = render_svg(&WheelCompositor::new().generate(&chart, 500.0).unwrap());
    assert!(svg.contains("&lt;Aries&amp;&gt;"));
    assert!(!svg.contains("<Aries&>"));
}

#[test]
fn test_active_glyph_rendered_enlarged() {
    let mut spec = spec(ChartStyle::NorthIndian, 500.0);
    spec.glyph_mut(Planet::Mars).unwrap().hover();
    let svg = render_svg(&spec);
    assert_eq!(svg.matches("class=\"planet active\"").count(), 1);
    assert!(svg.contains(&format!("r=\"{:.2}\"", 235.0_f32 * 0.065)));
}

#[test]
fn test_spec_json_roundtrip() {
    let spec = spec(ChartStyle::Western, 500.0);
    let json = serde_json::to_string(&spec).unwrap();
    let back: ChartSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(back.shapes.len(), spec.shapes.len());
    assert_eq!(back.style, ChartStyle::Western);
}
