use sector_telemetry::utils::validation::Validate;
use sector_telemetry::{
    Ayanamsa, ConfigProvider, DrawMode, InMemoryStore, TelemetryEngine, TelemetryError, TomlConfig,
};
use std::io::Write;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

#[tokio::test]
async fn test_toml_config_drives_engine_end_to_end() -> anyhow::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[engine]
latency_ms = 0

[location]
name = "Mumbai"
latitude = 19.076
longitude = 72.8777
timezone = "Asia/Kolkata"

[request]
ayanamsa = "kp"
date = "2024-03-15"
"#,
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    config.validate()?;
    assert_eq!(config.latency(), Duration::ZERO);
    assert_eq!(config.draw_mode(), DrawMode::Seeded);

    let request = config.request("2000-01-01");
    assert_eq!(request.date, "2024-03-15");
    assert_eq!(request.ayanamsa, Ayanamsa::Kp);

    let engine = TelemetryEngine::new(InMemoryStore::new(), &config);
    let response = engine.fetch(&request).await?;
    assert_eq!(response.planets.len(), 12);

    let direct = engine
        .fetch_planetary_data(19.076, 72.8777, "Asia/Kolkata", "2024-03-15", Ayanamsa::Kp)
        .await?;
    assert_eq!(*response, *direct);
    assert_eq!(engine.cache_stats().await.valid_entries, 1);

    Ok(())
}

#[test]
fn test_invalid_date_in_file_is_a_config_error() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("telemetry.toml");
    std::fs::write(
        &path,
        r#"
[location]
latitude = 0.0
longitude = 0.0
timezone = "UTC"

[request]
date = "15/03/2024"
"#,
    )?;

    let config = TomlConfig::from_file(&path)?;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, TelemetryError::InvalidConfigValueError { .. }));
    assert!(err.user_friendly_message().contains("request.date"));

    Ok(())
}
