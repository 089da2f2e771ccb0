use async_trait::async_trait;

use super::rates_errors::Result;
use super::rates_model::{ApiUsageStats, RateSnapshot};

/// Contract of the rate provider as seen by the pricing engine.
///
/// `get_current_rates` is deliberately infallible: the provider degrades
/// through cache, last persisted snapshot and hardcoded defaults, so a feed
/// outage never aborts a price calculation.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    async fn get_current_rates(&self) -> RateSnapshot;
    async fn force_refresh(&self) -> Result<RateSnapshot>;
    fn usage_stats(&self) -> ApiUsageStats;
}

pub trait RateRepositoryTrait: Send + Sync {
    fn get_latest_snapshot(&self) -> Result<Option<RateSnapshot>>;
    /// Insert-only: snapshots are immutable and never overwritten.
    fn save_snapshot(&self, snapshot: &RateSnapshot) -> Result<RateSnapshot>;
    fn get_snapshot_history(&self, limit: i64) -> Result<Vec<RateSnapshot>>;
}
