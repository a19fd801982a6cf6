pub mod chart;
pub mod error;
pub mod houses;
pub mod layout;
pub mod rendering;
pub mod report;
pub mod wheel;
pub mod zodiac;

pub use chart::{load_chart_from_json, Chart, ChartStyle, Planet};
pub use error::{ChartError, Result};
pub use houses::{house_of, House};
pub use rendering::{legend, render_svg, ChartSpec, WheelCompositor};
pub use report::{planet_report, PlanetRow};
pub use wheel::ChartWheel;
pub use zodiac::ZodiacSign;

/// Parse chart JSON and render it as an SVG wheel `width` pixels wide.
pub fn render_chart_svg(json: &str, width: f32) -> Result<String> {
    let chart = load_chart_from_json(json)?;
    let spec = WheelCompositor::new().generate(&chart, width)?;
    Ok(render_svg(&spec))
}
