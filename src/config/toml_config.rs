use crate::core::engine::DEFAULT_LATENCY;
use crate::domain::catalog::Ayanamsa;
use crate::domain::model::{DrawMode, Location, TelemetryRequest};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TelemetryError};
use crate::utils::validation::{
    as_config_error, validate_iso_date, validate_latitude, validate_longitude,
    validate_non_empty_string, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub engine: Option<EngineConfig>,
    pub location: LocationConfig,
    pub request: Option<RequestConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub latency_ms: Option<u64>,
    pub retrograde_draw: Option<DrawMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestConfig {
    pub ayanamsa: Option<Ayanamsa>,
    pub date: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOME_LATITUDE})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| TelemetryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let checks = || -> Result<()> {
            validate_latitude("location.latitude", self.location.latitude)?;
            validate_longitude("location.longitude", self.location.longitude)?;
            validate_non_empty_string("location.timezone", &self.location.timezone)?;
            if let Some(date) = self.request.as_ref().and_then(|r| r.date.as_deref()) {
                validate_iso_date("request.date", date)?;
            }
            Ok(())
        };
        checks().map_err(as_config_error)
    }

    pub fn location(&self) -> Location {
        Location {
            latitude: self.location.latitude,
            longitude: self.location.longitude,
            timezone: self.location.timezone.clone(),
            name: self.location.name.clone().unwrap_or_default(),
        }
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.request
            .as_ref()
            .and_then(|r| r.ayanamsa)
            .unwrap_or_default()
    }

    pub fn date(&self) -> Option<&str> {
        self.request.as_ref().and_then(|r| r.date.as_deref())
    }

    /// 以檔案內容組出請求；`fallback_date` 只在檔案沒有指定日期時使用
    pub fn request(&self, fallback_date: &str) -> TelemetryRequest {
        let date = self.date().unwrap_or(fallback_date);
        TelemetryRequest::new(self.location(), date, self.ayanamsa())
    }
}

impl ConfigProvider for TomlConfig {
    fn latency(&self) -> Duration {
        self.engine
            .as_ref()
            .and_then(|e| e.latency_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY)
    }

    fn draw_mode(&self) -> DrawMode {
        self.engine
            .as_ref()
            .and_then(|e| e.retrograde_draw)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
