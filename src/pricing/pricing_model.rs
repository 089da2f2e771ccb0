use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced component of the breakdown. `local_value` is informational
/// (per-line value in local currency); the authoritative total is computed
/// from the accumulated gross value, not by summing these lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownLine {
    pub metal_id: i32,
    pub metal: String,
    pub quantity_ppt: Decimal,
    pub unit: String,
    /// Adjusted price per gram in base currency (after discount, /31.1).
    pub rate_per_gram: Decimal,
    pub local_value: Decimal,
}

/// Result of one price calculation. Ephemeral and caller-owned; recompute
/// after `valid_until`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceCalculationResult {
    pub product_id: i32,
    pub company_id: i32,
    pub breakdown: Vec<PriceBreakdownLine>,
    /// Gross metal value in base currency, before costs and weight scaling.
    pub total_gross_value: Decimal,
    /// Gross value net of fixed and variable company costs, base currency.
    pub net_value: Decimal,
    /// Final quoted price in `currency`, scaled by product weight.
    ///
    /// When `erroneous` is true the value is retained for diagnostics but
    /// must not be shown to end users.
    pub final_total: Decimal,
    /// Sum of component quantities (diagnostic, not used in pricing math).
    pub total_ppt: Decimal,
    pub currency: String,
    pub erroneous: bool,
    /// Metals in the composition that belong to no priced class and were
    /// excluded from the valuation.
    pub unpriced_metals: Vec<String>,
    pub calculated_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
}
