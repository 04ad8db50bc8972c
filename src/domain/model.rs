use crate::domain::catalog::{Ayanamsa, Dignity, Nakshatra, Planet, Sign};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_iso_date, validate_latitude, validate_longitude, validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub name: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.006,
            timezone: "America/New_York".to_string(),
            name: "New York, NY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub name: Planet,
    pub longitude: f64,
    pub longitude_in_sign: f64,
    pub sign: Sign,
    pub speed: f64,
    pub retrograde: bool,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Planet,
    pub pada: u8,
    pub dignity: Dignity,
    pub commodities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSector {
    pub planet: Planet,
    pub sign: Sign,
    pub degree_in_sign: f64,
    pub focus_intensity: u8,
    pub industries: Vec<String>,
}

/// 快取的單位：12 顆行星位置與依強度排序的 12 個焦點產業
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryResponse {
    pub planets: Vec<PlanetPosition>,
    pub active_sectors: Vec<ActiveSector>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub valid_entries: usize,
}

/// 逆行旗標與速度的亂數來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// 以日期雜湊作種子，同一天永遠得到同樣結果
    #[default]
    Seeded,
    /// 每次計算都從系統熵取種子
    Entropy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// 快取鍵。時區刻意不在鍵內，同一座標與日期換時區仍命中同一筆
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    latitude_bits: u64,
    longitude_bits: u64,
    date: String,
    ayanamsa: Ayanamsa,
}

impl CacheKey {
    pub fn new(latitude: f64, longitude: f64, date: &str, ayanamsa: Ayanamsa) -> Self {
        // -0.0 + 0.0 == +0.0，讓兩種零落在同一個鍵
        Self {
            latitude_bits: (latitude + 0.0).to_bits(),
            longitude_bits: (longitude + 0.0).to_bits(),
            date: date.to_string(),
            ayanamsa,
        }
    }

    pub fn latitude(&self) -> f64 {
        f64::from_bits(self.latitude_bits)
    }

    pub fn longitude(&self) -> f64 {
        f64::from_bits(self.longitude_bits)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.latitude(),
            self.longitude(),
            self.date(),
            self.ayanamsa()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRequest {
    pub location: Location,
    pub date: String,
    pub ayanamsa: Ayanamsa,
}

impl TelemetryRequest {
    pub fn new(location: Location, date: impl Into<String>, ayanamsa: Ayanamsa) -> Self {
        Self {
            location,
            date: date.into(),
            ayanamsa,
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(
            self.location.latitude,
            self.location.longitude,
            &self.date,
            self.ayanamsa,
        )
    }
}

impl Validate for TelemetryRequest {
    fn validate(&self) -> Result<()> {
        validate_latitude("latitude", self.location.latitude)?;
        validate_longitude("longitude", self.location.longitude)?;
        validate_non_empty_string("timezone", &self.location.timezone)?;
        validate_iso_date("date", &self.date)?;
        Ok(())
    }
}
