use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: f32 = 500.0;
pub const DEFAULT_PADDING: f32 = 15.0;
pub const MIN_WIDTH: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Canvas width in pixels; the wheel is always square.
    pub width: f32,
    pub padding: f32,
    /// Style tag that overrides the chart's own, if set.
    pub style: Option<String>,
    /// Also write the planet legend.
    pub legend: bool,
    /// File the settings were read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            padding: DEFAULT_PADDING,
            style: None,
            legend: true,
            source: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RenderToml {
    #[serde(default = "default_width")]
    width: f32,
    #[serde(default = "default_padding")]
    padding: f32,
    #[serde(default)]
    style: Option<String>,
    #[serde(default = "default_legend")]
    legend: bool,
}

fn default_width() -> f32 {
    DEFAULT_WIDTH
}

fn default_padding() -> f32 {
    DEFAULT_PADDING
}

fn default_legend() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    render: Option<RenderToml>,
}

/// Try common relative paths for `configs/wheel.toml`, so the binary works
/// from the workspace root and from its own crate directory.
const SEARCH_PATHS: [&str; 2] = ["configs/wheel.toml", "../../configs/wheel.toml"];

/// Load render settings.
///
/// An explicit path must exist. Without one, the usual locations are
/// searched and built-in defaults are used when none is found. A file that
/// exists but does not parse or validate is always an error.
pub fn load_render_settings(path: Option<&Path>) -> anyhow::Result<RenderSettings> {
    let (text, source) = match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", p.display()))?;
            (text, p.to_path_buf())
        }
        None => match read_wheel_toml_text() {
            Some(found) => found,
            None => {
                log::debug!("No wheel.toml found in {:?}, using defaults", SEARCH_PATHS);
                return Ok(RenderSettings::default());
            }
        },
    };

    let mut settings = parse_render_settings(&text)
        .map_err(|e| anyhow::anyhow!("Invalid config {}: {e}", source.display()))?;
    settings.source = Some(source);
    Ok(settings)
}

fn read_wheel_toml_text() -> Option<(String, PathBuf)> {
    SEARCH_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (text, PathBuf::from(p)))
    })
}

/// Parse and validate the `[render]` table. A missing table means defaults.
pub fn parse_render_settings(text: &str) -> anyhow::Result<RenderSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))?;
    let Some(render) = root.render else {
        return Ok(RenderSettings::default());
    };

    let settings = RenderSettings {
        width: render.width,
        padding: render.padding,
        style: render.style.filter(|s| !s.trim().is_empty()),
        legend: render.legend,
        source: None,
    };
    validate(&settings)?;
    Ok(settings)
}

pub fn validate(settings: &RenderSettings) -> anyhow::Result<()> {
    if !settings.width.is_finite() || settings.width < MIN_WIDTH {
        anyhow::bail!(
            "render.width must be at least {}, got {}",
            MIN_WIDTH,
            settings.width
        );
    }
    if !settings.padding.is_finite()
        || settings.padding < 0.0
        || settings.padding >= settings.width / 4.0
    {
        anyhow::bail!(
            "render.padding must be in [0, {}), got {}",
            settings.width / 4.0,
            settings.padding
        );
    }
    Ok(())
}
