use crate::domain::model::{
    CacheKey, CacheStats, CacheStatus, DrawMode, PlanetaryResponse, TelemetryRequest,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// 回應快取。查詢與計算必須對同一個鍵是原子的：
/// 鍵存在期間 `compute` 最多只會被呼叫一次，失敗時不寫入任何東西。
pub trait ResponseStore: Send + Sync {
    fn get_or_compute<F>(
        &self,
        key: CacheKey,
        compute: F,
    ) -> impl std::future::Future<Output = Result<(Arc<PlanetaryResponse>, CacheStatus)>> + Send
    where
        F: FnOnce() -> Result<PlanetaryResponse> + Send;

    fn clear(&self) -> impl std::future::Future<Output = ()> + Send;

    fn len(&self) -> impl std::future::Future<Output = usize> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// 每次請求前的人工延遲
    fn latency(&self) -> Duration;
    fn draw_mode(&self) -> DrawMode;
}

#[async_trait]
pub trait TelemetryProvider: Send + Sync {
    async fn fetch(&self, request: &TelemetryRequest) -> Result<Arc<PlanetaryResponse>>;
    async fn clear_cache(&self);
    async fn cache_stats(&self) -> CacheStats;
}
