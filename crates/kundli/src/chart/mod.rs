pub mod data;
pub mod loader;
pub mod style;

pub use data::{Ascendant, Chart, Nakshatra, Placed, Planet, PlanetPosition, Rashi};
pub use loader::{load_chart_from_json, load_chart_from_value};
pub use style::ChartStyle;
