use async_trait::async_trait;

use super::pricing_errors::Result;
use super::pricing_model::PriceCalculationResult;

#[async_trait]
pub trait PricingServiceTrait: Send + Sync {
    /// Quote a product for a company, in the currency implied by the
    /// requesting user's country code.
    async fn calculate_price(
        &self,
        product_id: i32,
        company_id: i32,
        country_code: &str,
    ) -> Result<PriceCalculationResult>;
}
