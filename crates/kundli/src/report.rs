//! Per-planet detail rows shown alongside the wheel.

use crate::chart::{Chart, Placed, Planet};
use crate::houses::{planet_house, House};
use crate::zodiac::SignPlacement;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetRow {
    pub planet: Planet,
    pub glyph: &'static str,
    pub sign: String,
    pub longitude: f64,
    /// Degree within the sign.
    pub sign_degree: f64,
    pub nakshatra: String,
    pub pada: Option<u8>,
    pub lord: String,
    pub house: Option<House>,
}

impl PlanetRow {
    pub fn longitude_label(&self) -> String {
        format!("{:.2}° ({:.2}°)", self.longitude, self.sign_degree)
    }

    pub fn pada_label(&self) -> String {
        self.pada.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string())
    }

    /// `"5 (Children)"`, or `None` when the house is indeterminate.
    pub fn house_label(&self) -> Option<String> {
        self.house.map(|h| format!("{} ({})", h, h.meaning()))
    }
}

impl fmt::Display for PlanetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<8} {:<12} {:<20} {:<18} {:<2} {:<10} {}",
            self.glyph,
            self.planet.name(),
            self.sign,
            self.longitude_label(),
            self.nakshatra,
            self.pada_label(),
            self.lord,
            self.house_label().unwrap_or_default()
        )
    }
}

/// Report rows for every planet in canonical order.
pub fn planet_report(chart: &Chart) -> Vec<PlanetRow> {
    chart
        .positions()
        .map(|position| {
            let sign_degree = position
                .rashi
                .degree
                .unwrap_or_else(|| SignPlacement::from_longitude(position.longitude()).degree);
            let nakshatra = position.nakshatra.clone().unwrap_or_default();
            PlanetRow {
                planet: position.planet,
                glyph: position.planet.glyph(),
                sign: position.rashi.name.clone(),
                longitude: position.longitude,
                sign_degree,
                nakshatra: nakshatra.name,
                pada: nakshatra.pada,
                lord: nakshatra.lord,
                house: planet_house(chart, position),
            }
        })
        .collect()
}
