use thiserror::Error;

/// 找不到更具體訊息時顯示給使用者的預設文字
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to retrieve planetary telemetry";

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid request field '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Telemetry generation error: {message}")]
    GenerationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Generation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TelemetryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::Io,
            Self::TomlParseError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
            Self::GenerationError { .. } => ErrorCategory::Generation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Generation => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::GenerationError { message } if message.trim().is_empty() => {
                GENERIC_FAILURE_MESSAGE.to_string()
            }
            Self::GenerationError { message } => message.clone(),
            Self::ValidationError { field, reason, .. } => {
                format!("Request rejected: {} ({})", reason, field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::TomlParseError(_) => "The configuration file is not valid TOML".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(_) => "Could not encode the telemetry response".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ValidationError { .. } => {
                "Check latitude [-90, 90], longitude [-180, 180] and a YYYY-MM-DD date"
            }
            Self::InvalidConfigValueError { .. } | Self::ConfigError { .. } => {
                "Review the command line flags or the configuration file values"
            }
            Self::TomlParseError(_) => "Fix the TOML syntax and make sure every section is present",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::SerializationError(_) | Self::GenerationError { .. } => {
                "Retry the request; clear the cache if the problem persists"
            }
        }
    }

    pub(crate) fn validation(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_falls_back_to_generic_message() {
        let err = TelemetryError::GenerationError {
            message: String::new(),
        };
        assert_eq!(err.user_friendly_message(), GENERIC_FAILURE_MESSAGE);

        let err = TelemetryError::GenerationError {
            message: "position table exhausted".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "position table exhausted");
    }

    #[test]
    fn test_category_and_severity() {
        let err = TelemetryError::validation("latitude", 120.0, "out of range");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = TelemetryError::ConfigError {
            message: "missing".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.severity() > ErrorSeverity::Medium);
    }
}
