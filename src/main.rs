use clap::Parser;
use sector_telemetry::utils::error::ErrorSeverity;
use sector_telemetry::utils::{logger, validation::Validate};
use sector_telemetry::{
    format_date_time, select, CliConfig, ConfigProvider, InMemoryStore, Location,
    PlanetaryResponse, Selection, TelemetryEngine, TelemetryError, TelemetryProvider,
    TelemetryRequest, TomlConfig,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    location: &'a Location,
    date: &'a str,
    ayanamsa: String,
    generated_at: String,
    cache_entries: usize,
    telemetry: &'a PlanetaryResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<Selection>,
}

async fn run<C: ConfigProvider>(
    cli: &CliConfig,
    request: TelemetryRequest,
    settings: &C,
) -> Result<(), TelemetryError> {
    let engine = TelemetryEngine::new(InMemoryStore::new(), settings);
    let provider: &dyn TelemetryProvider = &engine;

    tracing::info!(
        "🔭 Fetching telemetry for {} on {} ({})",
        request.location.name,
        request.date,
        request.ayanamsa
    );
    let response: Arc<PlanetaryResponse> = provider.fetch(&request).await?;
    let stats = provider.cache_stats().await;
    tracing::debug!("Cache holds {} entries", stats.valid_entries);

    let report = Report {
        location: &request.location,
        date: &request.date,
        ayanamsa: request.ayanamsa.to_string(),
        generated_at: format_date_time(&chrono::Local::now()),
        cache_entries: stats.valid_entries,
        telemetry: &response,
        selection: select(cli.planet.as_deref(), cli.sign.as_deref(), &response),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

async fn execute(config: &CliConfig) -> Result<(), TelemetryError> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            let request = file_config.request(&config.date_or_today());
            run(config, request, &file_config).await
        }
        None => run(config, config.request(), config).await,
    }
}

fn report_error(e: &TelemetryError) -> i32 {
    tracing::error!(
        "❌ Telemetry request failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting sector-telemetry CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        std::process::exit(report_error(&e));
    }

    if let Err(e) = execute(&config).await {
        let exit_code = report_error(&e);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
