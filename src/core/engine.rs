use crate::core::positions::PositionGenerator;
use crate::core::sectors::resolve_sectors;
use crate::domain::catalog::Ayanamsa;
use crate::domain::model::{
    CacheStats, CacheStatus, DrawMode, Location, PlanetaryResponse, TelemetryRequest,
};
use crate::domain::ports::{ConfigProvider, ResponseStore, TelemetryProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

/// 不依賴 CLI 或 TOML 的預設引擎設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub latency: Duration,
    pub draw_mode: DrawMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            draw_mode: DrawMode::default(),
        }
    }
}

impl EngineSettings {
    /// 無延遲，測試用
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}

impl ConfigProvider for EngineSettings {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }
}

/// 產生完整回應：12 個位置加上排序後的焦點產業
pub fn build_response(generator: &PositionGenerator, date: &str) -> PlanetaryResponse {
    let planets = generator.generate(date);
    let active_sectors = resolve_sectors(&planets);
    PlanetaryResponse {
        planets,
        active_sectors,
    }
}

pub struct TelemetryEngine<S: ResponseStore> {
    store: S,
    generator: PositionGenerator,
    latency: Duration,
}

impl<S: ResponseStore> TelemetryEngine<S> {
    pub fn new<C: ConfigProvider>(store: S, config: &C) -> Self {
        let generator = PositionGenerator::new(config.draw_mode());
        let latency = config.latency();
        tracing::debug!(
            "Telemetry engine ready (draw mode: {:?}, latency: {:?})",
            generator.draw_mode(),
            latency
        );

        Self {
            store,
            generator,
            latency,
        }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, &EngineSettings::default())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub async fn fetch(&self, request: &TelemetryRequest) -> Result<Arc<PlanetaryResponse>> {
        if let Err(e) = request.validate() {
            tracing::warn!("⚠️ Rejected telemetry request: {}", e);
            return Err(e);
        }

        // 模擬網路延遲，命中快取也一樣要等
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let key = request.cache_key();
        tracing::debug!("Looking up telemetry for key {}", key);

        let generator = self.generator;
        let date = request.date.clone();
        let (response, status) = self
            .store
            .get_or_compute(key.clone(), move || Ok(build_response(&generator, &date)))
            .await?;

        match status {
            CacheStatus::Hit => tracing::debug!("Cache hit for {}", key),
            CacheStatus::Miss => tracing::debug!(
                "Cache miss for {}, generated {} positions",
                key,
                response.planets.len()
            ),
        }

        Ok(response)
    }

    /// 與儀表板相同的參數順序；時區只做驗證，不進快取鍵
    pub async fn fetch_planetary_data(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        date: &str,
        ayanamsa: Ayanamsa,
    ) -> Result<Arc<PlanetaryResponse>> {
        let location = Location {
            latitude,
            longitude,
            timezone: timezone.to_string(),
            name: String::new(),
        };
        self.fetch(&TelemetryRequest::new(location, date, ayanamsa))
            .await
    }

    pub async fn clear_cache(&self) {
        let removed = self.store.len().await;
        self.store.clear().await;
        tracing::info!("🧹 Cleared telemetry cache ({} entries)", removed);
    }

    pub async fn cache_stats(&self) -> CacheStats {
        CacheStats {
            valid_entries: self.store.len().await,
        }
    }
}

#[async_trait]
impl<S: ResponseStore> TelemetryProvider for TelemetryEngine<S> {
    async fn fetch(&self, request: &TelemetryRequest) -> Result<Arc<PlanetaryResponse>> {
        TelemetryEngine::fetch(self, request).await
    }

    async fn clear_cache(&self) {
        TelemetryEngine::clear_cache(self).await
    }

    async fn cache_stats(&self) -> CacheStats {
        TelemetryEngine::cache_stats(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::InMemoryStore;
    use crate::domain::catalog::{ALL_NAKSHATRAS, ALL_PLANETS, ALL_SIGNS};
    use crate::utils::error::TelemetryError;

    fn engine() -> TelemetryEngine<InMemoryStore> {
        TelemetryEngine::new(InMemoryStore::new(), &EngineSettings::immediate())
    }

    #[test]
    fn test_build_response_shape() {
        let response = build_response(&PositionGenerator::default(), "2024-01-01");
        assert_eq!(response.planets.len(), ALL_PLANETS.len());
        assert_eq!(response.active_sectors.len(), ALL_PLANETS.len());
        for position in &response.planets {
            assert!(ALL_SIGNS.contains(&position.sign));
            assert!(ALL_NAKSHATRAS.contains(&position.nakshatra));
        }
        for pair in response.active_sectors.windows(2) {
            assert!(pair[0].focus_intensity >= pair[1].focus_intensity);
        }
    }

    #[tokio::test]
    async fn test_fetch_caches_by_key() {
        let engine = engine();
        let first = engine
            .fetch_planetary_data(40.7128, -74.006, "America/New_York", "2024-01-01", Ayanamsa::Lahiri)
            .await
            .unwrap();
        let second = engine
            .fetch_planetary_data(40.7128, -74.006, "America/New_York", "2024-01-01", Ayanamsa::Lahiri)
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache_stats().await.valid_entries, 1);
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_request_without_caching() {
        let engine = engine();
        let result = engine
            .fetch_planetary_data(123.0, 0.0, "UTC", "2024-01-01", Ayanamsa::Lahiri)
            .await;

        assert!(matches!(result, Err(TelemetryError::ValidationError { .. })));
        assert_eq!(engine.cache_stats().await.valid_entries, 0);
    }

    #[tokio::test]
    async fn test_clear_cache_forces_recompute() {
        let engine = engine();
        let first = engine
            .fetch_planetary_data(0.0, 0.0, "UTC", "2024-01-01", Ayanamsa::Kp)
            .await
            .unwrap();
        engine.clear_cache().await;
        assert_eq!(engine.cache_stats().await.valid_entries, 0);

        let second = engine
            .fetch_planetary_data(0.0, 0.0, "UTC", "2024-01-01", Ayanamsa::Kp)
            .await
            .unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        // seeded draws make the recomputed response identical
        assert_eq!(*first, *second);
    }

    #[tokio::test]
    async fn test_fetch_waits_for_configured_latency() {
        let settings = EngineSettings {
            latency: Duration::from_millis(50),
            draw_mode: DrawMode::Seeded,
        };
        let engine = TelemetryEngine::new(InMemoryStore::new(), &settings);
        assert_eq!(engine.latency(), Duration::from_millis(50));

        let started = std::time::Instant::now();
        engine
            .fetch_planetary_data(10.0, 10.0, "UTC", "2024-01-01", Ayanamsa::Lahiri)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_with_defaults_uses_dashboard_latency() {
        let engine = TelemetryEngine::with_defaults(InMemoryStore::new());
        assert_eq!(engine.latency(), DEFAULT_LATENCY);
        assert_eq!(engine.latency(), Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_engine_through_provider_trait() {
        let engine = engine();
        let provider: &dyn TelemetryProvider = &engine;
        let request = TelemetryRequest::new(Location::default(), "2024-06-21", Ayanamsa::Raman);

        provider.fetch(&request).await.unwrap();
        assert_eq!(provider.cache_stats().await.valid_entries, 1);
        provider.clear_cache().await;
        assert_eq!(provider.cache_stats().await.valid_entries, 0);
    }
}
