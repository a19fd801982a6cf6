use thiserror::Error;

/// Errors that prevent a chart from being rendered at all.
///
/// Per-planet problems (an unresolvable sign) are not errors: they become
/// [`Diagnostic`](crate::rendering::Diagnostic)s on the drawing and the rest
/// of the wheel still renders.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Chart service reported failure: {0}")]
    Backend(String),
    #[error("Chart has no ascendant (lagna)")]
    MissingAscendant,
    #[error("Chart is missing planets: {0:?}")]
    MissingPlanets(Vec<String>),
    #[error("Invalid longitude for {body}: {value}")]
    InvalidLongitude { body: String, value: f64 },
    #[error("Invalid canvas width: {0}")]
    InvalidWidth(f32),
}

pub type Result<T> = std::result::Result<T, ChartError>;
