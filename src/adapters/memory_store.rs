use crate::domain::model::{CacheKey, CacheStatus, PlanetaryResponse};
use crate::domain::ports::ResponseStore;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// 行程內的回應快取。clone 會共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<CacheKey, Arc<PlanetaryResponse>>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseStore for InMemoryStore {
    async fn get_or_compute<F>(
        &self,
        key: CacheKey,
        compute: F,
    ) -> Result<(Arc<PlanetaryResponse>, CacheStatus)>
    where
        F: FnOnce() -> Result<PlanetaryResponse> + Send,
    {
        // 整段持有鎖，同一個鍵只會被計算一次
        let mut entries = self.entries.lock().await;
        if let Some(existing) = entries.get(&key) {
            return Ok((Arc::clone(existing), CacheStatus::Hit));
        }

        let response = Arc::new(compute()?);
        entries.insert(key, Arc::clone(&response));
        Ok((response, CacheStatus::Miss))
    }

    async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
