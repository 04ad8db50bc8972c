//! Closed vocabularies of the dashboard: planets, signs, nakshatras,
//! ayanamsa models and dignity classes.
//!
//! Every enum has a fixed ordering (`all()`), a 0-based `index()` into that
//! ordering and a display `name()`. Name lookups are fail-soft and return
//! `None` for anything unrecognized.

use crate::utils::error::{Result, TelemetryError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The 12 bodies shown on the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Uranus,
    Neptune,
    Pluto,
}

pub const ALL_PLANETS: [Planet; 12] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mars,
    Planet::Mercury,
    Planet::Jupiter,
    Planet::Venus,
    Planet::Saturn,
    Planet::Rahu,
    Planet::Ketu,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into `ALL_PLANETS`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lunar nodes are always reported retrograde.
    pub const fn is_lunar_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    pub const fn all() -> &'static [Planet; 12] {
        &ALL_PLANETS
    }

    /// Case-insensitive lookup. `Herschel` is accepted for Uranus.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("Herschel") {
            return Some(Self::Uranus);
        }
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

/// The 12 zodiac signs starting from Aries at 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
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

pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Sign at `index`, wrapping around the zodiac.
    pub const fn from_index(index: usize) -> Self {
        ALL_SIGNS[index % 12]
    }

    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_SIGNS
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// The 27 nakshatras from Ashwini to Revati, 13 deg 20' each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Self {
        ALL_NAKSHATRAS[index % 27]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|n| n.name().eq_ignore_ascii_case(name))
    }
}

/// Sidereal offset model. Only discriminates cache entries here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ayanamsa {
    #[default]
    Lahiri,
    Raman,
    Kp,
    Tropical,
}

pub const ALL_AYANAMSAS: [Ayanamsa; 4] = [
    Ayanamsa::Lahiri,
    Ayanamsa::Raman,
    Ayanamsa::Kp,
    Ayanamsa::Tropical,
];

impl Ayanamsa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Raman => "raman",
            Self::Kp => "kp",
            Self::Tropical => "tropical",
        }
    }

    pub const fn all() -> &'static [Ayanamsa; 4] {
        &ALL_AYANAMSAS
    }
}

/// Strength class of a planet in the sign it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    #[serde(rename = "exalted")]
    Exalted,
    #[serde(rename = "own_sign")]
    OwnSign,
    #[serde(rename = "debilitated")]
    Debilitated,
    #[serde(rename = "neutral")]
    Neutral,
    /// The planet has no dignity rule.
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl Dignity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::OwnSign => "own_sign",
            Self::Debilitated => "debilitated",
            Self::Neutral => "neutral",
            Self::NotApplicable => "n/a",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(Planet, Sign, Nakshatra, Ayanamsa, Dignity);

impl FromStr for Ayanamsa {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                TelemetryError::validation("ayanamsa", s, "Expected one of: lahiri, raman, kp, tropical")
            })
    }
}

impl FromStr for Planet {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| TelemetryError::validation("planet", s, "Unknown planet"))
    }
}

impl FromStr for Sign {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| TelemetryError::validation("sign", s, "Unknown sign"))
    }
}
