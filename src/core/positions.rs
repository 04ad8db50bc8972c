//! Mock planetary positions derived from a hash of the date string.
//!
//! Longitudes step around the zodiac by a fixed multiplier, so the same date
//! always lands every planet in the same sign and nakshatra. Speed and the
//! retrograde flag come from a `ChaCha8Rng` whose seeding is chosen by
//! `DrawMode`.

use crate::domain::catalog::{Dignity, Nakshatra, Planet, Sign, ALL_PLANETS};
use crate::domain::model::{DrawMode, PlanetPosition};
use crate::domain::tables::{dignity_rule, nakshatra_commodities, nakshatra_lord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Degrees advanced per unit of hash offset.
pub const DEGREES_PER_STEP: f64 = 13.3;

/// Hash offset between consecutive planets.
pub const PLANET_STRIDE: u64 = 55;

/// Nakshatra width used for indexing (13 deg 20').
pub const NAKSHATRA_SPAN: f64 = 13.333333;

pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// Draws above this value mark a non-node planet retrograde.
pub const RETROGRADE_THRESHOLD: f64 = 0.8;

/// Sum of the UTF-16 code units of `date`.
pub fn date_hash(date: &str) -> u64 {
    date.encode_utf16().map(u64::from).sum()
}

/// Mock ecliptic longitude of the planet at `index` for a date hash, in [0, 360).
pub fn mock_longitude(hash: u64, index: usize) -> f64 {
    let offset = hash + index as u64 * PLANET_STRIDE;
    (offset as f64 * DEGREES_PER_STEP) % 360.0
}

pub fn sign_of(longitude: f64) -> Sign {
    Sign::from_index((longitude / 30.0) as usize)
}

pub fn nakshatra_of(longitude: f64) -> Nakshatra {
    Nakshatra::from_index((longitude / NAKSHATRA_SPAN) as usize)
}

/// Quarter (1-4) of the nakshatra the longitude falls in.
pub fn pada_of(longitude: f64) -> u8 {
    let within = longitude % NAKSHATRA_SPAN;
    ((within / PADA_SPAN) as u8 + 1).min(4)
}

/// Priority: exaltation > debilitation > own sign > neutral.
pub fn dignity_of(planet: Planet, sign: Sign) -> Dignity {
    match dignity_rule(planet) {
        None => Dignity::NotApplicable,
        Some(rule) if rule.exaltation == sign => Dignity::Exalted,
        Some(rule) if rule.debilitation == sign => Dignity::Debilitated,
        Some(rule) if rule.own_signs.contains(&sign) => Dignity::OwnSign,
        Some(_) => Dignity::Neutral,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionGenerator {
    draw_mode: DrawMode,
}

impl PositionGenerator {
    pub fn new(draw_mode: DrawMode) -> Self {
        Self { draw_mode }
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// One position per planet, in `ALL_PLANETS` order.
    pub fn generate(&self, date: &str) -> Vec<PlanetPosition> {
        let hash = date_hash(date);
        let mut rng = match self.draw_mode {
            DrawMode::Seeded => ChaCha8Rng::seed_from_u64(hash),
            DrawMode::Entropy => ChaCha8Rng::from_entropy(),
        };

        ALL_PLANETS
            .iter()
            .map(|&planet| place(planet, hash, &mut rng))
            .collect()
    }
}

fn place<R: Rng>(planet: Planet, hash: u64, rng: &mut R) -> PlanetPosition {
    let longitude = mock_longitude(hash, planet.index());
    let sign = sign_of(longitude);
    let nakshatra = nakshatra_of(longitude);

    let speed = rng.gen::<f64>() * 1.5 - 0.2;
    let retrograde = planet.is_lunar_node() || rng.gen::<f64>() > RETROGRADE_THRESHOLD;

    PlanetPosition {
        name: planet,
        longitude,
        longitude_in_sign: longitude % 30.0,
        sign,
        speed,
        retrograde,
        nakshatra,
        nakshatra_lord: nakshatra_lord(nakshatra),
        pada: pada_of(longitude),
        dignity: dignity_of(planet, sign),
        commodities: nakshatra_commodities(nakshatra)
            .iter()
            .map(|c| c.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_hash_sums_code_units() {
        assert_eq!(date_hash("2024-01-01"), 484);
        assert_eq!(date_hash(""), 0);
        assert_eq!(date_hash("AB"), 65 + 66);
    }

    #[test]
    fn test_known_positions_for_new_year_2024() {
        let positions = PositionGenerator::default().generate("2024-01-01");
        assert_eq!(positions.len(), 12);

        // hash 484 -> Sun at 484 * 13.3 mod 360 = 317.2
        let sun = &positions[0];
        assert_eq!(sun.name, Planet::Sun);
        assert!((sun.longitude - 317.2).abs() < 1e-6);
        assert!((sun.longitude_in_sign - 17.2).abs() < 1e-6);
        assert_eq!(sun.sign, Sign::Aquarius);
        assert_eq!(sun.nakshatra, Nakshatra::Shatabhisha);
        assert_eq!(sun.nakshatra_lord, Planet::Rahu);
        assert_eq!(sun.pada, 4);
        assert_eq!(sun.dignity, Dignity::Neutral);

        // Mars: offset 594 -> 340.2
        let mars = &positions[2];
        assert_eq!(mars.name, Planet::Mars);
        assert_eq!(mars.sign, Sign::Pisces);
        assert_eq!(mars.nakshatra, Nakshatra::UttaraBhadrapada);
    }

    #[test]
    fn test_positions_follow_planet_order_and_ranges() {
        let positions = PositionGenerator::default().generate("2025-06-30");
        for (position, planet) in positions.iter().zip(ALL_PLANETS) {
            assert_eq!(position.name, planet);
            assert!((0.0..360.0).contains(&position.longitude));
            assert!((0.0..30.0).contains(&position.longitude_in_sign));
            assert!((1..=4).contains(&position.pada));
            assert!((-0.2..1.3).contains(&position.speed));
            assert_eq!(position.sign, sign_of(position.longitude));
            assert_eq!(position.nakshatra_lord, nakshatra_lord(position.nakshatra));
        }
    }

    #[test]
    fn test_lunar_nodes_are_always_retrograde() {
        for mode in [DrawMode::Seeded, DrawMode::Entropy] {
            let positions = PositionGenerator::new(mode).generate("2024-01-01");
            assert!(positions[Planet::Rahu.index()].retrograde);
            assert!(positions[Planet::Ketu.index()].retrograde);
        }
    }

    #[test]
    fn test_seeded_mode_is_reproducible() {
        let generator = PositionGenerator::new(DrawMode::Seeded);
        assert_eq!(generator.generate("2024-03-15"), generator.generate("2024-03-15"));
    }

    #[test]
    fn test_entropy_mode_keeps_longitudes_stable() {
        let generator = PositionGenerator::new(DrawMode::Entropy);
        let a = generator.generate("2024-03-15");
        let b = generator.generate("2024-03-15");
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.longitude, y.longitude);
            assert_eq!(x.sign, y.sign);
            assert_eq!(x.nakshatra, y.nakshatra);
        }
    }

    #[test]
    fn test_dignity_rules() {
        assert_eq!(dignity_of(Planet::Sun, Sign::Aries), Dignity::Exalted);
        assert_eq!(dignity_of(Planet::Sun, Sign::Libra), Dignity::Debilitated);
        assert_eq!(dignity_of(Planet::Sun, Sign::Leo), Dignity::OwnSign);
        assert_eq!(dignity_of(Planet::Sun, Sign::Gemini), Dignity::Neutral);
        // exaltation wins over own sign
        assert_eq!(dignity_of(Planet::Mercury, Sign::Virgo), Dignity::Exalted);
        assert_eq!(dignity_of(Planet::Neptune, Sign::Pisces), Dignity::NotApplicable);
    }

    #[test]
    fn test_pada_boundaries() {
        assert_eq!(pada_of(0.0), 1);
        assert_eq!(pada_of(3.4), 2);
        assert_eq!(pada_of(13.0), 4);
        assert_eq!(pada_of(13.34), 1);
    }

    #[test]
    fn test_commodities_come_from_nakshatra() {
        let positions = PositionGenerator::default().generate("2024-01-01");
        for position in positions {
            let expected: Vec<String> = nakshatra_commodities(position.nakshatra)
                .iter()
                .map(|c| c.to_string())
                .collect();
            assert_eq!(position.commodities, expected);
        }
    }
}
