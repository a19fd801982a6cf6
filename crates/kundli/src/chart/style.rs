use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout convention used to place planets on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartStyle {
    /// Longitude-driven, ascendant not re-centered.
    #[default]
    NorthIndian,
    /// House-driven, one 30° wedge per house.
    SouthIndian,
    /// Krishnamurti Paddhati. Drawn ascendant-relative like Western.
    Kp,
    /// Ascendant-relative continuous layout.
    Western,
}

impl ChartStyle {
    pub const ALL: [ChartStyle; 4] = [
        ChartStyle::NorthIndian,
        ChartStyle::SouthIndian,
        ChartStyle::Kp,
        ChartStyle::Western,
    ];

    /// Canonical tag, as accepted by [`FromStr`].
    pub fn tag(self) -> &'static str {
        match self {
            ChartStyle::NorthIndian => "north-indian",
            ChartStyle::SouthIndian => "south-indian",
            ChartStyle::Kp => "kp",
            ChartStyle::Western => "western",
        }
    }

    /// Caption drawn under the wheel.
    pub fn display_name(self) -> &'static str {
        match self {
            ChartStyle::NorthIndian => "Vedic (North Indian)",
            ChartStyle::SouthIndian => "Vedic (South Indian)",
            ChartStyle::Kp => "KP System",
            ChartStyle::Western => "Western",
        }
    }

    /// Resolve a style tag, falling back to North-Indian for anything
    /// unrecognized.
    pub fn from_tag_or_default(tag: Option<&str>) -> Self {
        match tag {
            None => ChartStyle::default(),
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                log::warn!(
                    "Unknown chart style {:?}, falling back to {}",
                    tag,
                    ChartStyle::default().tag()
                );
                ChartStyle::default()
            }),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart style: {0:?}")]
pub struct UnknownStyle(pub String);

impl FromStr for ChartStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north-indian" | "north_indian" | "vedic-north" | "vedic" => Ok(ChartStyle::NorthIndian),
            "south-indian" | "south_indian" | "vedic-south" => Ok(ChartStyle::SouthIndian),
            "kp" => Ok(ChartStyle::Kp),
            "western" => Ok(ChartStyle::Western),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}
