use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default endpoint of the external metal price feed.
pub const METAL_PRICE_API_URL: &str = "https://api.metalpriceapi.com/v1/latest";

/// Symbols requested from the feed. Rhodium is not quoted and is estimated.
pub const METAL_PRICE_API_CURRENCIES: &str = "EUR,XAU,XAG,XPD,XPT";

/// Timeout for feed calls.
pub const FEED_TIMEOUT_SECS: u64 = 15;

/// In-process cache TTL (30 minutes).
pub const RATE_CACHE_TTL_SECS: u64 = 30 * 60;

/// Persisted snapshots older than this are considered stale (2 hours).
pub const SNAPSHOT_MAX_AGE_SECS: i64 = 2 * 60 * 60;

/// Monthly allowance of the feed plan.
pub const API_MONTHLY_LIMIT: u32 = 100;

/// Soft ceiling on feed calls; the last 10 calls are reserved for emergencies.
pub const API_CALL_BUDGET: u32 = 90;

/// Rhodium is not quoted by the feed and is estimated from platinum
/// (rhodium historically trades at roughly 3-5x platinum).
pub const RHODIUM_PLATINUM_MULTIPLIER: Decimal = dec!(4.5);

// Hardcoded last-resort rates, USD per troy ounce (COP per USD for the
// exchange rate). Used when the feed is down and no snapshot exists.
pub const FALLBACK_XAU: Decimal = dec!(2000);
pub const FALLBACK_XAG: Decimal = dec!(25);
pub const FALLBACK_XPD: Decimal = dec!(1500);
pub const FALLBACK_XPT: Decimal = dec!(1000);
pub const FALLBACK_XRH: Decimal = dec!(5000);
pub const FALLBACK_COP: Decimal = dec!(4000);
