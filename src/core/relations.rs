//! Planet/sign relationship lookups used when a planet or sign is selected
//! on the chart: owned signs, aspected signs and static sector lists.
//!
//! The `*_by_name` helpers take raw strings from the front end and never
//! fail: an unrecognized planet or sign yields an empty list (or the
//! default 7th-house aspect for an unknown planet).

use crate::domain::catalog::{Planet, Sign};
use crate::domain::model::PlanetaryResponse;
use crate::domain::tables::{
    aspect_offsets, dignity_rule, planet_sectors, sign_sectors, DEFAULT_ASPECT_OFFSETS,
};
use serde::Serialize;

/// Signs ruled by `planet`; empty for planets without a dignity rule.
pub fn owned_signs(planet: Planet) -> &'static [Sign] {
    dignity_rule(planet).map(|rule| rule.own_signs).unwrap_or(&[])
}

pub fn aspected_signs(planet: Planet, from: Sign) -> Vec<Sign> {
    signs_at_offsets(aspect_offsets(planet), from)
}

/// Houses are counted from `from` as house 1.
pub fn signs_at_offsets(offsets: &[usize], from: Sign) -> Vec<Sign> {
    offsets
        .iter()
        .map(|&house| Sign::from_index(from.index() + house + 11))
        .collect()
}

pub fn owned_signs_by_name(planet: &str) -> Vec<Sign> {
    Planet::from_name(planet)
        .map(|p| owned_signs(p).to_vec())
        .unwrap_or_default()
}

pub fn aspected_signs_by_name(planet: &str, sign: &str) -> Vec<Sign> {
    let Some(from) = Sign::from_name(sign) else {
        return Vec::new();
    };
    let offsets = Planet::from_name(planet)
        .map(aspect_offsets)
        .unwrap_or(&DEFAULT_ASPECT_OFFSETS);
    signs_at_offsets(offsets, from)
}

pub fn sectors_for_planet(name: &str) -> Vec<&'static str> {
    Planet::from_name(name)
        .map(|p| planet_sectors(p).to_vec())
        .unwrap_or_default()
}

pub fn sectors_for_sign(name: &str) -> Vec<&'static str> {
    Sign::from_name(name)
        .map(|s| sign_sectors(s).to_vec())
        .unwrap_or_default()
}

/// 圖表上選取行星或星座時顯示的關聯資訊
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub planet_sectors: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sign_sectors: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owned_signs: Vec<Sign>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aspected_signs: Vec<Sign>,
}

/// Builds the selection panel for a chart.
///
/// When only a planet is selected, the sign it occupies in `response`
/// becomes the selected sign, so sign sectors and aspects are read from
/// where the planet sits. An explicit `sign` always wins.
pub fn select(
    planet: Option<&str>,
    sign: Option<&str>,
    response: &PlanetaryResponse,
) -> Option<Selection> {
    if planet.is_none() && sign.is_none() {
        return None;
    }

    // 沒指定星座時，跟著行星目前所在的星座
    let sign = sign.map(str::to_string).or_else(|| {
        let planet = Planet::from_name(planet?)?;
        response
            .planets
            .iter()
            .find(|p| p.name == planet)
            .map(|p| p.sign.name().to_string())
    });

    let mut selection = Selection {
        planet: planet.map(str::to_string),
        sign: sign.clone(),
        ..Selection::default()
    };
    if let Some(planet) = planet {
        selection.planet_sectors = sectors_for_planet(planet);
        selection.owned_signs = owned_signs_by_name(planet);
    }
    if let Some(sign) = &sign {
        selection.sign_sectors = sectors_for_sign(sign);
        if let Some(planet) = planet {
            selection.aspected_signs = aspected_signs_by_name(planet, sign);
        }
    }
    Some(selection)
}
