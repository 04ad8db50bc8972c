pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::InMemoryStore;
pub use core::engine::{build_response, EngineSettings, TelemetryEngine};
pub use core::positions::PositionGenerator;
pub use core::relations::{
    aspected_signs, aspected_signs_by_name, owned_signs, owned_signs_by_name, sectors_for_planet,
    sectors_for_sign, select, Selection,
};
pub use domain::catalog::{Ayanamsa, Dignity, Nakshatra, Planet, Sign};
pub use domain::model::{
    ActiveSector, CacheKey, CacheStats, CacheStatus, DrawMode, Location, PlanetPosition,
    PlanetaryResponse, TelemetryRequest,
};
pub use domain::ports::{ConfigProvider, ResponseStore, TelemetryProvider};
pub use utils::error::{Result, TelemetryError};
pub use utils::format::format_date_time;
