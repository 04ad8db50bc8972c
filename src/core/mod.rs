pub mod engine;
pub mod positions;
pub mod relations;
pub mod sectors;

pub use crate::domain::model::{PlanetaryResponse, TelemetryRequest};
pub use crate::domain::ports::{ConfigProvider, ResponseStore, TelemetryProvider};
pub use crate::utils::error::Result;
