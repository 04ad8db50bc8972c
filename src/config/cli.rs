use crate::domain::catalog::Ayanamsa;
use crate::domain::model::{DrawMode, Location, TelemetryRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    as_config_error, validate_iso_date, validate_latitude, validate_longitude,
    validate_non_empty_string, validate_path, Validate, ISO_DATE_FORMAT,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sector-telemetry")]
#[command(about = "Mock planetary positions mapped to market sectors")]
pub struct CliConfig {
    #[arg(long, default_value = "40.7128", allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, default_value = "-74.006", allow_hyphen_values = true)]
    pub longitude: f64,

    #[arg(long, default_value = "America/New_York")]
    pub timezone: String,

    #[arg(long, default_value = "New York, NY")]
    pub location_name: String,

    #[arg(long, help = "Date as YYYY-MM-DD, defaults to today")]
    pub date: Option<String>,

    #[arg(long, default_value = "lahiri", help = "lahiri, raman, kp or tropical")]
    pub ayanamsa: Ayanamsa,

    #[arg(long, default_value = "600", help = "Artificial delay before each lookup")]
    pub latency_ms: u64,

    #[arg(long, help = "Draw retrograde flags from OS entropy instead of the date")]
    pub random_retrograde: bool,

    #[arg(long, help = "TOML configuration file; replaces location and engine flags")]
    pub config: Option<String>,

    #[arg(long, help = "Show sectors, owned and aspected signs for this planet")]
    pub planet: Option<String>,

    #[arg(long, help = "Show sectors for this sign; with --planet also aspects from it")]
    pub sign: Option<String>,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude,
            longitude: self.longitude,
            timezone: self.timezone.clone(),
            name: self.location_name.clone(),
        }
    }

    /// 未指定日期時使用 UTC 的今天，與儀表板預設的快取鍵一致
    pub fn date_or_today(&self) -> String {
        self.date
            .clone()
            .unwrap_or_else(|| chrono::Utc::now().format(ISO_DATE_FORMAT).to_string())
    }

    pub fn request(&self) -> TelemetryRequest {
        TelemetryRequest::new(self.location(), self.date_or_today(), self.ayanamsa)
    }
}

impl ConfigProvider for CliConfig {
    fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    fn draw_mode(&self) -> DrawMode {
        if self.random_retrograde {
            DrawMode::Entropy
        } else {
            DrawMode::Seeded
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let checks = || -> Result<()> {
            validate_latitude("latitude", self.latitude)?;
            validate_longitude("longitude", self.longitude)?;
            validate_non_empty_string("timezone", &self.timezone)?;
            if let Some(date) = &self.date {
                validate_iso_date("date", date)?;
            }
            if let Some(path) = &self.config {
                validate_path("config", path)?;
            }
            Ok(())
        };
        checks().map_err(as_config_error)
    }
}
