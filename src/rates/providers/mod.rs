pub mod metal_price_api_client;

use async_trait::async_trait;

use super::rates_errors::Result;
use super::rates_model::RateSnapshot;

/// External price feed. The only production implementation talks to
/// metalpriceapi.com; tests substitute failing or canned feeds.
#[async_trait]
pub trait RateFeed: Send + Sync {
    async fn fetch_latest(&self) -> Result<RateSnapshot>;
}
