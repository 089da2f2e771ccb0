use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::providers::RateFeed;
use super::rates_constants::{
    API_CALL_BUDGET, API_MONTHLY_LIMIT, FALLBACK_COP, FALLBACK_XAG, FALLBACK_XAU, FALLBACK_XPD,
    FALLBACK_XPT, FALLBACK_XRH, RATE_CACHE_TTL_SECS, SNAPSHOT_MAX_AGE_SECS,
};
use super::rates_errors::{RateError, Result};
use super::rates_model::{ApiUsageStats, RateSnapshot};
use super::rates_traits::{RateRepositoryTrait, RateServiceTrait};

struct CachedRates {
    snapshot: RateSnapshot,
    cached_at: Instant,
}

/// Rate provider with two staleness layers (in-process cache, persisted
/// snapshot age), a feed call budget and a fallback chain that bottoms out
/// in hardcoded rates. One instance per process; shared by reference.
pub struct RateService {
    repository: Arc<dyn RateRepositoryTrait>,
    feed: Arc<dyn RateFeed>,
    cache: RwLock<Option<CachedRates>>,
    calls_used: AtomicU32,
    // Serializes refreshes so concurrent stale readers await one fetch
    // instead of each spending a feed call.
    refresh_gate: tokio::sync::Mutex<()>,
}

impl RateService {
    pub fn new(repository: Arc<dyn RateRepositoryTrait>, feed: Arc<dyn RateFeed>) -> Self {
        Self {
            repository,
            feed,
            cache: RwLock::new(None),
            calls_used: AtomicU32::new(0),
            refresh_gate: tokio::sync::Mutex::new(()),
        }
    }

    fn read_cache(&self) -> Option<RateSnapshot> {
        let guard = self.cache.read().ok()?;
        let cached = guard.as_ref()?;
        if cached.cached_at.elapsed().as_secs() < RATE_CACHE_TTL_SECS {
            Some(cached.snapshot.clone())
        } else {
            None
        }
    }

    fn update_cache(&self, snapshot: &RateSnapshot) {
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(CachedRates {
                snapshot: snapshot.clone(),
                cached_at: Instant::now(),
            });
        }
    }

    fn snapshot_is_current(snapshot: &RateSnapshot) -> bool {
        snapshot.age_secs(Utc::now().timestamp()) < SNAPSHOT_MAX_AGE_SECS
    }

    async fn fetch_and_persist(&self) -> Result<RateSnapshot> {
        let snapshot = self.feed.fetch_latest().await?;
        let calls = self.calls_used.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Fetched fresh metal rates from feed (calls used: {})", calls);

        // Persisting is best-effort: a failed insert must not discard a
        // successfully fetched snapshot.
        if let Err(e) = self.repository.save_snapshot(&snapshot) {
            warn!("Failed to persist rate snapshot: {}", e);
        }

        self.update_cache(&snapshot);
        Ok(snapshot)
    }

    /// Last snapshot on record, or the hardcoded defaults when the table is
    /// empty or unreadable.
    fn fallback_rates(&self) -> RateSnapshot {
        match self.repository.get_latest_snapshot() {
            Ok(Some(snapshot)) => {
                warn!("Using last persisted rate snapshot as fallback");
                snapshot
            }
            Ok(None) => {
                warn!("No persisted rate snapshot; using hardcoded fallback rates");
                Self::default_rates()
            }
            Err(e) => {
                warn!("Rate snapshot lookup failed ({}); using hardcoded fallback rates", e);
                Self::default_rates()
            }
        }
    }

    pub fn default_rates() -> RateSnapshot {
        let now = Utc::now();
        RateSnapshot {
            timestamp: now.timestamp(),
            date: now.date_naive(),
            cop: FALLBACK_COP,
            usd: Decimal::ONE,
            xau: FALLBACK_XAU,
            xag: FALLBACK_XAG,
            xpd: FALLBACK_XPD,
            xpt: FALLBACK_XPT,
            xrh: FALLBACK_XRH,
            unit: "USD".to_string(),
        }
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    async fn get_current_rates(&self) -> RateSnapshot {
        if let Some(snapshot) = self.read_cache() {
            debug!("Using cached metal rates");
            return snapshot;
        }

        let _refresh = self.refresh_gate.lock().await;

        // Another request may have refreshed while we waited for the gate.
        if let Some(snapshot) = self.read_cache() {
            return snapshot;
        }

        match self.repository.get_latest_snapshot() {
            Ok(Some(snapshot)) if Self::snapshot_is_current(&snapshot) => {
                debug!("Using persisted rate snapshot");
                self.update_cache(&snapshot);
                return snapshot;
            }
            Ok(_) => {}
            Err(e) => warn!("Rate snapshot lookup failed: {}", e),
        }

        if self.calls_used.load(Ordering::SeqCst) >= API_CALL_BUDGET {
            warn!("Feed call budget nearly exhausted; skipping feed refresh");
            return self.fallback_rates();
        }

        match self.fetch_and_persist().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Metal rate feed unavailable ({}); degrading to fallback", e);
                self.fallback_rates()
            }
        }
    }

    /// Admin-triggered refresh. Bypasses both staleness layers but still
    /// counts against the call budget; feed errors surface to the caller.
    async fn force_refresh(&self) -> Result<RateSnapshot> {
        let _refresh = self.refresh_gate.lock().await;
        if self.calls_used.load(Ordering::SeqCst) >= API_MONTHLY_LIMIT {
            return Err(RateError::BudgetExhausted);
        }
        info!("Force refreshing metal rates from feed");
        self.fetch_and_persist().await
    }

    fn usage_stats(&self) -> ApiUsageStats {
        let calls_used = self.calls_used.load(Ordering::SeqCst);
        let cache_age_secs = self
            .cache
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|c| c.cached_at.elapsed().as_secs()));

        ApiUsageStats {
            calls_used,
            calls_remaining: API_MONTHLY_LIMIT.saturating_sub(calls_used),
            cache_age_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    struct FakeRepository {
        snapshot: Mutex<Option<RateSnapshot>>,
        saved: AtomicU32,
    }

    impl FakeRepository {
        fn new(snapshot: Option<RateSnapshot>) -> Self {
            Self {
                snapshot: Mutex::new(snapshot),
                saved: AtomicU32::new(0),
            }
        }
    }

    impl RateRepositoryTrait for FakeRepository {
        fn get_latest_snapshot(&self) -> Result<Option<RateSnapshot>> {
            Ok(self.snapshot.lock().unwrap().clone())
        }

        fn save_snapshot(&self, snapshot: &RateSnapshot) -> Result<RateSnapshot> {
            self.saved.fetch_add(1, Ordering::SeqCst);
            *self.snapshot.lock().unwrap() = Some(snapshot.clone());
            Ok(snapshot.clone())
        }

        fn get_snapshot_history(&self, _limit: i64) -> Result<Vec<RateSnapshot>> {
            Ok(self.snapshot.lock().unwrap().clone().into_iter().collect())
        }
    }

    struct FakeFeed {
        calls: AtomicU32,
        fail: bool,
        delay: Duration,
    }

    impl FakeFeed {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail,
                delay: Duration::ZERO,
            }
        }

        fn slow(delay: Duration) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail: false,
                delay,
            }
        }
    }

    #[async_trait]
    impl RateFeed for FakeFeed {
        async fn fetch_latest(&self) -> Result<RateSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail {
                return Err(RateError::ProviderError("feed down".to_string()));
            }
            let mut snapshot = RateService::default_rates();
            snapshot.xpd = rust_decimal_macros::dec!(1600);
            Ok(snapshot)
        }
    }

    fn stale_snapshot() -> RateSnapshot {
        let mut snapshot = RateService::default_rates();
        snapshot.timestamp = Utc::now().timestamp() - SNAPSHOT_MAX_AGE_SECS - 60;
        snapshot.xpd = rust_decimal_macros::dec!(1234);
        snapshot
    }

    #[tokio::test]
    async fn fresh_fetch_is_persisted_and_cached() {
        let repository = Arc::new(FakeRepository::new(None));
        let feed = Arc::new(FakeFeed::new(false));
        let service = RateService::new(repository.clone(), feed.clone());

        let rates = service.get_current_rates().await;
        assert_eq!(rates.xpd, rust_decimal_macros::dec!(1600));
        assert_eq!(repository.saved.load(Ordering::SeqCst), 1);

        // Second call within the TTL must not hit the feed again.
        let _ = service.get_current_rates().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn current_persisted_snapshot_avoids_the_feed() {
        let repository = Arc::new(FakeRepository::new(Some(RateService::default_rates())));
        let feed = Arc::new(FakeFeed::new(false));
        let service = RateService::new(repository, feed.clone());

        let _ = service.get_current_rates().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn feed_outage_falls_back_to_last_snapshot() {
        let repository = Arc::new(FakeRepository::new(Some(stale_snapshot())));
        let feed = Arc::new(FakeFeed::new(true));
        let service = RateService::new(repository, feed);

        let rates = service.get_current_rates().await;
        assert_eq!(rates.xpd, rust_decimal_macros::dec!(1234));
    }

    #[tokio::test]
    async fn feed_outage_without_snapshot_uses_hardcoded_defaults() {
        let repository = Arc::new(FakeRepository::new(None));
        let feed = Arc::new(FakeFeed::new(true));
        let service = RateService::new(repository, feed);

        let rates = service.get_current_rates().await;
        assert_eq!(rates.xpd, FALLBACK_XPD);
        assert_eq!(rates.cop, FALLBACK_COP);
    }

    #[tokio::test]
    async fn exhausted_budget_skips_the_feed() {
        let repository = Arc::new(FakeRepository::new(Some(stale_snapshot())));
        let feed = Arc::new(FakeFeed::new(false));
        let service = RateService::new(repository, feed.clone());
        service.calls_used.store(API_CALL_BUDGET, Ordering::SeqCst);

        let rates = service.get_current_rates().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 0);
        assert_eq!(rates.xpd, rust_decimal_macros::dec!(1234));
    }

    #[tokio::test]
    async fn concurrent_stale_readers_share_one_refresh() {
        let repository = Arc::new(FakeRepository::new(None));
        let feed = Arc::new(FakeFeed::slow(Duration::from_millis(200)));
        let service = Arc::new(RateService::new(repository, feed.clone()));

        // All readers miss the cache at once; the refresh gate must collapse
        // them into a single feed call.
        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(
                async move { service.get_current_rates().await },
            ));
        }

        for handle in handles {
            let rates = handle.await.unwrap();
            assert_eq!(rates.xpd, rust_decimal_macros::dec!(1600));
        }
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.usage_stats().calls_used, 1);
    }

    #[tokio::test]
    async fn force_refresh_bypasses_staleness_and_counts_budget() {
        let repository = Arc::new(FakeRepository::new(Some(RateService::default_rates())));
        let feed = Arc::new(FakeFeed::new(false));
        let service = RateService::new(repository, feed.clone());

        let rates = service.force_refresh().await.unwrap();
        assert_eq!(rates.xpd, rust_decimal_macros::dec!(1600));
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.usage_stats().calls_used, 1);
    }

    #[tokio::test]
    async fn force_refresh_surfaces_feed_errors() {
        let repository = Arc::new(FakeRepository::new(None));
        let feed = Arc::new(FakeFeed::new(true));
        let service = RateService::new(repository, feed);

        assert!(service.force_refresh().await.is_err());
    }
}
