use crate::chart::style::ChartStyle;
use crate::error::{ChartError, Result};
use crate::zodiac::{normalize_longitude, SignPlacement, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The nine classical bodies (navagraha) drawn on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Planet::Sun => "☉",
            Planet::Moon => "☽",
            Planet::Mercury => "☿",
            Planet::Venus => "♀",
            Planet::Mars => "♂",
            Planet::Jupiter => "♃",
            Planet::Saturn => "♄",
            Planet::Rahu => "☊",
            Planet::Ketu => "☋",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Planet::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or(())
    }
}

/// Sign placement as supplied by the chart service.
///
/// The name is kept as the raw string; resolving it to a [`ZodiacSign`]
/// happens at use sites and may fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rashi {
    #[serde(default)]
    pub name: String,
    /// Degree within the sign; derived from longitude when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
}

/// Lunar mansion details, display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nakshatra {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pada: Option<u8>,
    #[serde(default)]
    pub lord: String,
}

/// Anything that sits at a longitude and carries a supplied sign.
pub trait Placed {
    fn longitude(&self) -> f64;
    fn rashi(&self) -> &Rashi;

    /// Resolve the supplied sign name, `None` if it is not canonical.
    fn sign(&self) -> Option<ZodiacSign> {
        self.rashi().name.parse().ok()
    }

    fn placement(&self) -> Option<SignPlacement> {
        let sign = self.sign()?;
        let degree = self
            .rashi()
            .degree
            .unwrap_or_else(|| SignPlacement::from_longitude(self.longitude()).degree);
        Some(SignPlacement { sign, degree })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Ecliptic longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<Nakshatra>,
}

impl Placed for PlanetPosition {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn rashi(&self) -> &Rashi {
        &self.rashi
    }
}

/// The lagna. Same shape as a planet without the body name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub longitude: f64,
    pub rashi: Rashi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nakshatra: Option<Nakshatra>,
}

impl Placed for Ascendant {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn rashi(&self) -> &Rashi {
        &self.rashi
    }
}

/// A complete chart, read-only for the duration of a render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub ascendant: Ascendant,
    pub planets: BTreeMap<Planet, PlanetPosition>,
    pub style: ChartStyle,
}

impl Chart {
    /// Build a chart, normalizing longitudes and checking that all nine
    /// bodies are present.
    pub fn new(
        mut ascendant: Ascendant,
        planets: impl IntoIterator<Item = PlanetPosition>,
        style: ChartStyle,
    ) -> Result<Self> {
        ascendant.longitude = checked_longitude("Ascendant", ascendant.longitude)?;

        let mut by_planet = BTreeMap::new();
        for mut position in planets {
            position.longitude = checked_longitude(position.planet.name(), position.longitude)?;
            let planet = position.planet;
            if by_planet.insert(planet, position).is_some() {
                log::warn!("{} given more than once, keeping the last entry", planet);
            }
        }

        let missing: Vec<String> = Planet::ALL
            .iter()
            .filter(|p| !by_planet.contains_key(p))
            .map(|p| p.name().to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ChartError::MissingPlanets(missing));
        }

        Ok(Self {
            ascendant,
            planets: by_planet,
            style,
        })
    }

    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.get(&planet)
    }

    /// Planets in canonical order.
    pub fn positions(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.planets.values()
    }

    /// Same chart drawn with another layout convention.
    pub fn with_style(&self, style: ChartStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }
}

fn checked_longitude(body: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidLongitude {
            body: body.to_string(),
            value,
        });
    }
    Ok(normalize_longitude(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(planet: Planet, longitude: f64, sign: &str) -> PlanetPosition {
        PlanetPosition {
            planet,
            longitude,
            rashi: Rashi {
                name: sign.to_string(),
                degree: None,
            },
            nakshatra: None,
        }
    }

    fn lagna() -> Ascendant {
        Ascendant {
            longitude: 5.0,
            rashi: Rashi {
                name: "Aries".to_string(),
                degree: Some(5.0),
            },
            nakshatra: None,
        }
    }

    #[test]
    fn test_planet_parse() {
        assert_eq!("rahu".parse::<Planet>(), Ok(Planet::Rahu));
        assert!("Pluto".parse::<Planet>().is_err());
    }

    #[test]
    fn test_new_chart_requires_all_planets() {
        let result = Chart::new(lagna(), vec![body(Planet::Sun, 125.0, "Leo")], ChartStyle::NorthIndian);
        match result {
            Err(ChartError::MissingPlanets(missing)) => {
                assert_eq!(missing.len(), 8);
                assert!(!missing.contains(&"Sun".to_string()));
            }
            other => panic!("Expected MissingPlanets, got {:?}", other),
        }
    }

    #[test]
    fn test_new_chart_normalizes_longitudes() {
        let planets = Planet::ALL
            .iter()
            .map(|p| body(*p, 370.0, "Aries"))
            .collect::<Vec<_>>();
        let chart = Chart::new(lagna(), planets, ChartStyle::Western).unwrap();
        assert!((chart.planet(Planet::Moon).unwrap().longitude - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_chart_rejects_nan() {
        let mut asc = lagna();
        asc.longitude = f64::NAN;
        let planets = Planet::ALL.iter().map(|p| body(*p, 0.0, "Aries"));
        assert!(matches!(
            Chart::new(asc, planets, ChartStyle::Kp),
            Err(ChartError::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn test_placement_uses_supplied_degree_or_longitude() {
        let sun = body(Planet::Sun, 125.25, "Leo");
        let placement = sun.placement().unwrap();
        assert_eq!(placement.sign, ZodiacSign::Leo);
        assert!((placement.degree - 5.25).abs() < 1e-9);

        let asc = lagna();
        assert_eq!(asc.placement().unwrap().degree, 5.0);

        let lost = body(Planet::Mars, 10.0, "Arie");
        assert!(lost.sign().is_none());
        assert!(lost.placement().is_none());
    }

    #[test]
    fn test_repeated_planet_keeps_last_entry() {
        let mut planets: Vec<PlanetPosition> = Planet::ALL
            .iter()
            .map(|p| body(*p, 10.0, "Aries"))
            .collect();
        planets.push(body(Planet::Sun, 125.0, "Leo"));
        let chart = Chart::new(lagna(), planets, ChartStyle::NorthIndian).unwrap();
        assert_eq!(chart.planets.len(), 9);
        assert_eq!(chart.planet(Planet::Sun).unwrap().rashi.name, "Leo");
    }
}
