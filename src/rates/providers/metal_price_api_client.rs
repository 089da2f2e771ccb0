use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::RateFeed;
use crate::rates::rates_constants::{
    FALLBACK_COP, FALLBACK_XAG, FALLBACK_XAU, FALLBACK_XPD, FALLBACK_XPT, FEED_TIMEOUT_SECS,
    METAL_PRICE_API_CURRENCIES, METAL_PRICE_API_URL, RHODIUM_PLATINUM_MULTIPLIER,
};
use crate::rates::rates_errors::{RateError, Result};
use crate::rates::rates_model::RateSnapshot;

#[derive(Deserialize, Debug)]
struct MetalPriceApiResponse {
    success: bool,
    base: String,
    timestamp: i64,
    rates: HashMap<String, f64>,
}

pub struct MetalPriceApiClient {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl MetalPriceApiClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_url(METAL_PRICE_API_URL.to_string(), api_key)
    }

    pub fn with_url(api_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .build()
            .map_err(RateError::NetworkError)?;

        Ok(MetalPriceApiClient {
            api_url,
            api_key,
            client,
        })
    }

    fn rate_or(rates: &HashMap<String, f64>, symbol: &str, default: Decimal) -> Decimal {
        rates
            .get(symbol)
            .and_then(|v| Decimal::from_f64(*v))
            .filter(|d| d.is_sign_positive() && !d.is_zero())
            .unwrap_or(default)
    }

    /// Rhodium has no direct quote on the feed; estimate it from platinum.
    fn estimate_rhodium(platinum: Decimal) -> Decimal {
        platinum * RHODIUM_PLATINUM_MULTIPLIER
    }

    fn snapshot_from_response(response: MetalPriceApiResponse) -> Result<RateSnapshot> {
        let date = DateTime::from_timestamp(response.timestamp, 0)
            .ok_or_else(|| {
                RateError::ParsingError(format!("Invalid feed timestamp: {}", response.timestamp))
            })?
            .date_naive();

        let xpt = Self::rate_or(&response.rates, "XPT", FALLBACK_XPT);

        Ok(RateSnapshot {
            timestamp: response.timestamp,
            date,
            // The feed does not quote COP; the exchange rate keeps its
            // configured default until a dedicated FX source exists.
            cop: FALLBACK_COP,
            usd: Decimal::ONE,
            xau: Self::rate_or(&response.rates, "XAU", FALLBACK_XAU),
            xag: Self::rate_or(&response.rates, "XAG", FALLBACK_XAG),
            xpd: Self::rate_or(&response.rates, "XPD", FALLBACK_XPD),
            xpt,
            xrh: Self::estimate_rhodium(xpt),
            unit: response.base,
        })
    }
}

#[async_trait]
impl RateFeed for MetalPriceApiClient {
    async fn fetch_latest(&self) -> Result<RateSnapshot> {
        let url = format!(
            "{}?api_key={}&base=USD&currencies={}",
            self.api_url, self.api_key, METAL_PRICE_API_CURRENCIES
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "SITEKOL-Backend/1.0")
            .send()
            .await?
            .json::<MetalPriceApiResponse>()
            .await?;

        if !response.success {
            return Err(RateError::ProviderError(
                "Metal price API request failed".to_string(),
            ));
        }

        Self::snapshot_from_response(response)
    }
}
