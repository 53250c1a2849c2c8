//! Caching layer for station directory snapshots.
//!
//! Station availability changes minute to minute, so snapshots are
//! only useful fresh; a short TTL bounds staleness while keeping
//! request latency off the directory backend. The engine itself is
//! pure and stateless, so serving several requests from one cached
//! snapshot is safe.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::directory::{DirectoryError, DirectorySource};
use crate::domain::Station;

/// A station snapshot with its fetch time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub stations: Arc<Vec<Arc<Station>>>,
    pub fetched_at: DateTime<Utc>,
}

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for a cached snapshot.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
        }
    }
}

/// Directory source with snapshot caching.
///
/// Wraps a [`DirectorySource`] and caches the converted snapshot.
/// There is a single cached entry; concurrent callers during a miss
/// coalesce onto one backend fetch.
pub struct CachedDirectory {
    source: DirectorySource,
    cache: MokaCache<(), Snapshot>,
}

impl CachedDirectory {
    /// Create a new cached directory.
    pub fn new(source: DirectorySource, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { source, cache }
    }

    /// Get the current station snapshot, fetching on a cache miss.
    pub async fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        if let Some(snapshot) = self.cache.get(&()).await {
            debug!(
                stations = snapshot.stations.len(),
                "serving cached station snapshot"
            );
            return Ok(snapshot);
        }

        let stations = self.source.fetch_stations().await?;
        let snapshot = Snapshot {
            stations: Arc::new(stations),
            fetched_at: Utc::now(),
        };
        debug!(
            stations = snapshot.stations.len(),
            "fetched fresh station snapshot"
        );

        self.cache.insert((), snapshot.clone()).await;
        Ok(snapshot)
    }

    /// Drop the cached snapshot so the next call fetches fresh.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectoryClient;

    const SAMPLE: &str = r#"[
        {
            "id": "st-001",
            "name": "Central Charging",
            "address": "1 Le Loi",
            "lat": 10.7769,
            "lng": 106.7009,
            "chargers": [
                {"connector_type": "ccs2", "power_kw": 150.0,
                 "price_per_kwh": 3500.0, "status": "available"}
            ]
        }
    ]"#;

    fn mock_source(dir: &std::path::Path) -> DirectorySource {
        std::fs::write(dir.join("stations.json"), SAMPLE).unwrap();
        DirectorySource::Mock(MockDirectoryClient::new(dir).unwrap())
    }

    #[tokio::test]
    async fn snapshot_converts_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let cached = CachedDirectory::new(mock_source(dir.path()), &CacheConfig::default());

        let first = cached.snapshot().await.unwrap();
        assert_eq!(first.stations.len(), 1);
        assert_eq!(first.stations[0].id.as_str(), "st-001");

        // Second call is served from cache: same snapshot instant.
        let second = cached.snapshot().await.unwrap();
        assert_eq!(second.fetched_at, first.fetched_at);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let dir = tempfile::tempdir().unwrap();
        let cached = CachedDirectory::new(mock_source(dir.path()), &CacheConfig::default());

        let first = cached.snapshot().await.unwrap();
        cached.invalidate();
        let second = cached.snapshot().await.unwrap();

        assert!(second.fetched_at >= first.fetched_at);
    }
}
