use kundli::chart::{load_chart_from_json, ChartStyle, Planet};
use kundli::{render_chart_svg, ChartError, ChartWheel};

const CHART_JSON: &str = include_str!("fixtures/chart_aries.json");

fn wheel() -> ChartWheel {
    let mut wheel = ChartWheel::new(500.0);
    wheel
        .set_chart(load_chart_from_json(CHART_JSON).unwrap())
        .unwrap();
    wheel
}

#[test]
fn test_empty_wheel_draws_nothing() {
    let mut wheel = ChartWheel::default();
    assert!(wheel.drawing().is_none());
    wheel.resize(300.0).unwrap();
    assert!(wheel.drawing().is_none());
    assert!(wheel.to_svg().is_none());
}

#[test]
fn test_set_chart_draws() {
    let wheel = wheel();
    let drawing = wheel.drawing().unwrap();
    assert_eq!(drawing.width, 500.0);
    assert_eq!(drawing.style, ChartStyle::NorthIndian);
    assert_eq!(drawing.glyphs().count(), 9);
}

#[test]
fn test_resize_redraws() {
    let mut wheel = wheel();
    wheel.resize(320.0).unwrap();
    let drawing = wheel.drawing().unwrap();
    assert_eq!(drawing.width, 320.0);
    assert_eq!(drawing.radius, 145.0);
}

#[test]
fn test_style_override_and_restore() {
    let mut wheel = wheel();
    wheel.set_style(Some(ChartStyle::Western)).unwrap();
    assert_eq!(wheel.drawing().unwrap().style, ChartStyle::Western);
    assert_eq!(wheel.effective_style(), Some(ChartStyle::Western));

    wheel.set_style(None).unwrap();
    assert_eq!(wheel.drawing().unwrap().style, ChartStyle::NorthIndian);
}

#[test]
fn test_hover_is_local_and_reset_by_redraw() {
    let mut wheel = wheel();
    wheel.glyph_mut(Planet::Sun).unwrap().hover();
    assert!(wheel.glyph(Planet::Sun).unwrap().tooltip_visible());
    assert!(!wheel.glyph(Planet::Moon).unwrap().tooltip_visible());

    wheel.glyph_mut(Planet::Sun).unwrap().unhover();
    assert!(!wheel.glyph(Planet::Sun).unwrap().tooltip_visible());

    wheel.glyph_mut(Planet::Sun).unwrap().focus();
    wheel.resize(500.0).unwrap();
    assert!(!wheel.glyph(Planet::Sun).unwrap().tooltip_visible());
}

#[test]
fn test_failed_resize_clears_drawing() {
    let mut wheel = wheel();
    assert!(matches!(wheel.resize(10.0), Err(ChartError::InvalidWidth(_))));
    assert!(wheel.drawing().is_none());
    wheel.resize(500.0).unwrap();
    assert!(wheel.drawing().is_some());
}

#[test]
fn test_clear() {
    let mut wheel = wheel();
    wheel.clear();
    assert!(wheel.drawing().is_none());
    assert_eq!(wheel.effective_style(), None);
}

#[test]
fn test_incomplete_chart_produces_no_wheel() {
    let json = r#"{
        "lagna": { "longitude": 5.0, "rashi": { "name": "Aries" } },
        "planets": { "Sun": { "longitude": 125.0, "rashi": { "name": "Leo" } } }
    }"#;
    match render_chart_svg(json, 500.0) {
        Err(ChartError::MissingPlanets(missing)) => {
            assert_eq!(missing.len(), 8);
            assert!(missing.contains(&"Moon".to_string()));
        }
        other => panic!("Expected MissingPlanets, got {:?}", other),
    }
}

#[test]
fn test_render_chart_svg() {
    let svg = render_chart_svg(CHART_JSON, 400.0).unwrap();
    assert!(svg.contains(">Vedic (North Indian)</text>"));
    assert!(svg.contains("Sun 125.0° Leo"));
}
