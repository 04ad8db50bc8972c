use crate::domain::catalog::{Dignity, Planet, Sign};
use crate::domain::model::{ActiveSector, PlanetPosition};
use crate::domain::tables::{planet_sectors, sign_sectors};
use std::collections::HashSet;

/// 每個焦點最多列出的產業數
pub const MAX_INDUSTRIES: usize = 8;

pub const BASE_INTENSITY: i8 = 3;
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;

/// 行星產業在前、星座產業在後，去重並保留第一次出現的順序
pub fn merge_industries(planet: Planet, sign: Sign) -> Vec<String> {
    let mut seen = HashSet::new();
    planet_sectors(planet)
        .iter()
        .chain(sign_sectors(sign))
        .filter(|name| seen.insert(**name))
        .take(MAX_INDUSTRIES)
        .map(|name| name.to_string())
        .collect()
}

pub fn focus_intensity(dignity: Dignity, retrograde: bool) -> u8 {
    let mut intensity = BASE_INTENSITY;
    match dignity {
        Dignity::Exalted | Dignity::OwnSign => intensity += 1,
        Dignity::Debilitated => intensity -= 1,
        Dignity::Neutral | Dignity::NotApplicable => {}
    }
    if retrograde {
        intensity += 1;
    }
    intensity.clamp(MIN_INTENSITY as i8, MAX_INTENSITY as i8) as u8
}

pub fn resolve_sector(position: &PlanetPosition) -> ActiveSector {
    ActiveSector {
        planet: position.name,
        sign: position.sign,
        degree_in_sign: position.longitude_in_sign,
        focus_intensity: focus_intensity(position.dignity, position.retrograde),
        industries: merge_industries(position.name, position.sign),
    }
}

/// 依強度由高到低排序；`sort_by` 是穩定排序，同分時維持行星表順序
pub fn resolve_sectors(positions: &[PlanetPosition]) -> Vec<ActiveSector> {
    let mut sectors: Vec<ActiveSector> = positions.iter().map(resolve_sector).collect();
    sectors.sort_by(|a, b| b.focus_intensity.cmp(&a.focus_intensity));
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Nakshatra;

    fn position(planet: Planet, sign: Sign, dignity: Dignity, retrograde: bool) -> PlanetPosition {
        PlanetPosition {
            name: planet,
            longitude: sign.index() as f64 * 30.0 + 10.0,
            longitude_in_sign: 10.0,
            sign,
            speed: 0.5,
            retrograde,
            nakshatra: Nakshatra::Ashwini,
            nakshatra_lord: Planet::Ketu,
            pada: 1,
            dignity,
            commodities: vec![],
        }
    }

    #[test]
    fn test_merge_industries_unions_in_order() {
        let industries = merge_industries(Planet::Rahu, Sign::Aries);
        assert_eq!(
            industries,
            vec![
                "Media & Ent",
                "Telecom",
                "IT",
                "Electrical Goods",
                "Crude Oil",
                "Pharmaceuticals",
                "Gold",
                "Woollen Blankets",
            ]
        );
    }

    #[test]
    fn test_merge_industries_deduplicates() {
        let industries = merge_industries(Planet::Rahu, Sign::Aquarius);
        assert_eq!(industries.len(), MAX_INDUSTRIES);
        assert_eq!(
            industries.iter().filter(|i| *i == "Electrical Goods").count(),
            1
        );
        assert_eq!(industries[6], "Paints");
        assert_eq!(industries[7], "Wooden Furniture");
    }

    #[test]
    fn test_merge_industries_truncates_to_eight() {
        let industries = merge_industries(Planet::Mercury, Sign::Virgo);
        assert_eq!(industries.len(), MAX_INDUSTRIES);
        assert!(!industries.contains(&"IT".to_string()));
    }

    #[test]
    fn test_focus_intensity_scoring() {
        assert_eq!(focus_intensity(Dignity::Neutral, false), 3);
        assert_eq!(focus_intensity(Dignity::NotApplicable, true), 4);
        assert_eq!(focus_intensity(Dignity::Exalted, true), 5);
        assert_eq!(focus_intensity(Dignity::OwnSign, false), 4);
        assert_eq!(focus_intensity(Dignity::Debilitated, false), 2);
        assert_eq!(focus_intensity(Dignity::Debilitated, true), 3);
    }

    #[test]
    fn test_resolve_sectors_sorts_stably_by_intensity() {
        let positions = vec![
            position(Planet::Sun, Sign::Gemini, Dignity::Neutral, false),
            position(Planet::Moon, Sign::Taurus, Dignity::Exalted, false),
            position(Planet::Mars, Sign::Cancer, Dignity::Debilitated, false),
            position(Planet::Mercury, Sign::Leo, Dignity::Neutral, false),
            position(Planet::Rahu, Sign::Leo, Dignity::Neutral, true),
        ];

        let sectors = resolve_sectors(&positions);
        let order: Vec<Planet> = sectors.iter().map(|s| s.planet).collect();
        assert_eq!(
            order,
            vec![
                Planet::Moon,
                Planet::Rahu,
                Planet::Sun,
                Planet::Mercury,
                Planet::Mars,
            ]
        );
        assert_eq!(sectors[0].focus_intensity, 4);
        assert_eq!(sectors[4].focus_intensity, 2);
    }

    #[test]
    fn test_resolve_sector_copies_placement() {
        let sector = resolve_sector(&position(Planet::Saturn, Sign::Libra, Dignity::Exalted, true));
        assert_eq!(sector.planet, Planet::Saturn);
        assert_eq!(sector.sign, Sign::Libra);
        assert_eq!(sector.degree_in_sign, 10.0);
        assert_eq!(sector.focus_intensity, 5);
        assert_eq!(sector.industries.len(), MAX_INDUSTRIES);
    }
}
