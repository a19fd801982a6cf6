//! The twelve zodiac signs and their element classes.
//!
//! Signs are 30° wide and start from Aries at 0°. The element of a sign
//! cycles Fire, Earth, Air, Water in canonical order, so it is simply
//! `index % 4`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of one sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Sign names and glyphs, in canonical order.
const SIGNS: &[(&str, &str)] = &[
    ("Aries", "♈"),
    ("Taurus", "♉"),
    ("Gemini", "♊"),
    ("Cancer", "♋"),
    ("Leo", "♌"),
    ("Virgo", "♍"),
    ("Libra", "♎"),
    ("Scorpio", "♏"),
    ("Sagittarius", "♐"),
    ("Capricorn", "♑"),
    ("Aquarius", "♒"),
    ("Pisces", "♓"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in canonical order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Position in canonical order (0-11).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    /// Sign containing the given ecliptic longitude.
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = normalize_longitude(longitude);
        Self::from_index((normalized / SIGN_SPAN).floor() as usize)
    }

    pub fn name(self) -> &'static str {
        SIGNS[self.index()].0
    }

    pub fn glyph(self) -> &'static str {
        SIGNS[self.index()].1
    }

    pub fn element(self) -> Element {
        Element::ALL[self.index() % 4]
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for sign names that are not one of the canonical twelve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unresolvable zodiac sign: {0:?}")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// Classical element of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
        }
    }
}

/// A sign plus the degree reached inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignPlacement {
    pub sign: ZodiacSign,
    /// Degrees within the sign, in [0, 30).
    pub degree: f64,
}

impl SignPlacement {
    pub fn from_longitude(longitude: f64) -> Self {
        let normalized = normalize_longitude(longitude);
        Self {
            sign: ZodiacSign::from_longitude(normalized),
            degree: normalized % SIGN_SPAN,
        }
    }
}

/// Wrap any finite longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_order_and_glyphs() {
        assert_eq!(ZodiacSign::Aries.index(), 0);
        assert_eq!(ZodiacSign::Pisces.index(), 11);
        assert_eq!(ZodiacSign::Leo.glyph(), "♌");
        assert_eq!(ZodiacSign::from_index(13), ZodiacSign::Taurus);
    }

    #[test]
    fn test_elements_cycle() {
        assert_eq!(ZodiacSign::Aries.element(), Element::Fire);
        assert_eq!(ZodiacSign::Taurus.element(), Element::Earth);
        assert_eq!(ZodiacSign::Gemini.element(), Element::Air);
        assert_eq!(ZodiacSign::Cancer.element(), Element::Water);
        assert_eq!(ZodiacSign::Sagittarius.element(), Element::Fire);
        assert_eq!(ZodiacSign::Pisces.element(), Element::Water);
    }

    #[test]
    fn test_parse_sign_names() {
        assert_eq!("Leo".parse::<ZodiacSign>(), Ok(ZodiacSign::Leo));
        assert_eq!(" scorpio ".parse::<ZodiacSign>(), Ok(ZodiacSign::Scorpio));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
        assert!("".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn test_placement_from_longitude() {
        let p = SignPlacement::from_longitude(125.5);
        assert_eq!(p.sign, ZodiacSign::Leo);
        assert!((p.degree - 5.5).abs() < 1e-9);

        let wrapped = SignPlacement::from_longitude(-10.0);
        assert_eq!(wrapped.sign, ZodiacSign::Pisces);
        assert!((wrapped.degree - 20.0).abs() < 1e-9);

        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
    }
}
