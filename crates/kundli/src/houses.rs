//! Whole-sign house derivation.
//!
//! House 1 is the ascendant's own sign and houses then follow the zodiac
//! in canonical order, so a planet's house depends only on the two signs.

use crate::chart::{Chart, Placed, Planet, PlanetPosition};
use crate::zodiac::ZodiacSign;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display labels for houses 1-12. No effect on geometry.
const HOUSE_MEANINGS: [&str; 12] = [
    "Ascendant",
    "Wealth",
    "Siblings",
    "Home",
    "Children",
    "Health",
    "Partnership",
    "Transformation",
    "Philosophy",
    "Career",
    "Friends",
    "Spirituality",
];

/// A house number in [1, 12].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        House::new(number).ok_or_else(|| format!("house out of range: {}", number))
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.0
    }
}

impl House {
    pub fn new(number: u8) -> Option<Self> {
        (1..=12).contains(&number).then_some(House(number))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn meaning(self) -> &'static str {
        HOUSE_MEANINGS[(self.0 - 1) as usize]
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// House of `planet_sign` counted from `ascendant_sign`.
pub fn house_of(ascendant_sign: ZodiacSign, planet_sign: ZodiacSign) -> House {
    let a = ascendant_sign.index();
    let p = planet_sign.index();
    House(((p + 12 - a) % 12) as u8 + 1)
}

/// House from raw sign names. `None` when either name is not one of the
/// twelve canonical signs; callers must then omit the house.
pub fn house_of_names(ascendant_sign: &str, planet_sign: &str) -> Option<House> {
    let asc = ascendant_sign.parse::<ZodiacSign>().ok()?;
    let planet = planet_sign.parse::<ZodiacSign>().ok()?;
    Some(house_of(asc, planet))
}

/// House of one planet in a chart, logging when it is indeterminate.
pub fn planet_house(chart: &Chart, position: &PlanetPosition) -> Option<House> {
    match (chart.ascendant.sign(), position.sign()) {
        (Some(asc), Some(sign)) => Some(house_of(asc, sign)),
        _ => {
            log::warn!(
                "Sign not found: Lagna={:?}, {}={:?}",
                chart.ascendant.rashi.name,
                position.planet,
                position.rashi.name
            );
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseAnnotation {
    pub planet: Planet,
    pub house: Option<House>,
}

/// House annotation for every planet in canonical order.
pub fn annotate_houses(chart: &Chart) -> Vec<HouseAnnotation> {
    chart
        .positions()
        .map(|position| HouseAnnotation {
            planet: position.planet,
            house: planet_house(chart, position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::ALL_SIGNS;
    use std::collections::HashSet;

    #[test]
    fn test_own_sign_is_first_house() {
        for sign in ALL_SIGNS {
            assert_eq!(house_of(sign, sign).number(), 1);
        }
    }

    #[test]
    fn test_house_is_bijective_for_each_ascendant() {
        for asc in ALL_SIGNS {
            let houses: HashSet<u8> = ALL_SIGNS.iter().map(|p| house_of(asc, *p).number()).collect();
            assert_eq!(houses.len(), 12);
            assert!(houses.iter().all(|h| (1..=12).contains(h)));
        }
    }

    #[test]
    fn test_house_wraps_around() {
        assert_eq!(house_of(ZodiacSign::Aries, ZodiacSign::Leo).number(), 5);
        assert_eq!(house_of(ZodiacSign::Leo, ZodiacSign::Aries).number(), 9);
        assert_eq!(house_of(ZodiacSign::Pisces, ZodiacSign::Aries).number(), 2);
        assert_eq!(house_of(ZodiacSign::Taurus, ZodiacSign::Aries).number(), 12);
    }

    #[test]
    fn test_house_of_names_indeterminate() {
        assert_eq!(house_of_names("Aries", "Leo").map(House::number), Some(5));
        assert_eq!(house_of_names("Aries", "Lion"), None);
        assert_eq!(house_of_names("", "Leo"), None);
    }

    #[test]
    fn test_meanings() {
        assert_eq!(House::new(1).unwrap().meaning(), "Ascendant");
        assert_eq!(House::new(10).unwrap().meaning(), "Career");
        assert_eq!(House::new(12).unwrap().meaning(), "Spirituality");
        assert!(House::new(0).is_none());
        assert!(House::new(13).is_none());
    }
}
