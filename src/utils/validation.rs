use crate::utils::error::{Result, TelemetryError};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 與任何值比較都為 false，所以要用否定式才會被擋下
    if !(value >= min && value <= max) {
        return Err(TelemetryError::validation(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_latitude(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, -90.0, 90.0)
}

pub fn validate_longitude(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, -180.0, 180.0)
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TelemetryError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 日期必須是 `YYYY-MM-DD` 的真實日曆日
pub fn validate_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).map_err(|e| {
        TelemetryError::validation(field_name, value, format!("Expected YYYY-MM-DD date: {}", e))
    })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    validate_non_empty_string(field_name, path)?;

    if path.contains('\0') {
        return Err(TelemetryError::validation(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

/// 把請求層級的驗證錯誤改標成設定錯誤，讓 CLI 的分類與建議正確
pub fn as_config_error(err: TelemetryError) -> TelemetryError {
    match err {
        TelemetryError::ValidationError {
            field,
            value,
            reason,
        } => TelemetryError::InvalidConfigValueError {
            field,
            value,
            reason,
        },
        other => other,
    }
}
