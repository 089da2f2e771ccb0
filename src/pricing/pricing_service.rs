use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::pricing_errors::Result;
use super::pricing_model::{PriceBreakdownLine, PriceCalculationResult};
use super::pricing_traits::PricingServiceTrait;
use crate::companies::CompanyTermsServiceTrait;
use crate::constants::{
    BASE_CURRENCY, GRAMS_PER_TROY_OUNCE, LOCAL_COUNTRY, LOCAL_CURRENCY, PARTS_PER_THOUSAND,
    PRICE_VALIDITY_MINUTES,
};
use crate::formulas::FormulaServiceTrait;
use crate::metals::MetalClass;
use crate::products::CompositionServiceTrait;
use crate::rates::RateServiceTrait;

/// The pricing engine. Combines a product's composition, the current rate
/// snapshot, the active formula and the requesting company's terms into a
/// quoted price. Pure over its four inputs: no writes, no shared state.
pub struct PricingService {
    rates: Arc<dyn RateServiceTrait>,
    formulas: Arc<dyn FormulaServiceTrait>,
    companies: Arc<dyn CompanyTermsServiceTrait>,
    products: Arc<dyn CompositionServiceTrait>,
}

impl PricingService {
    pub fn new(
        rates: Arc<dyn RateServiceTrait>,
        formulas: Arc<dyn FormulaServiceTrait>,
        companies: Arc<dyn CompanyTermsServiceTrait>,
        products: Arc<dyn CompositionServiceTrait>,
    ) -> Self {
        Self {
            rates,
            formulas,
            companies,
            products,
        }
    }
}

#[async_trait]
impl PricingServiceTrait for PricingService {
    async fn calculate_price(
        &self,
        product_id: i32,
        company_id: i32,
        country_code: &str,
    ) -> Result<PriceCalculationResult> {
        // The four inputs are independent; fetch them concurrently and
        // join before combining.
        let (composition, rates, formula, terms) = tokio::join!(
            self.products.get_composition(product_id),
            self.rates.get_current_rates(),
            self.formulas.get_current(),
            self.companies.get_terms(company_id),
        );

        let composition = composition?;
        let formula = formula?;
        let terms = terms?;

        // COP factor applied to base-currency values for local display.
        let fx_factor = rates.cop - formula.currency_adjustment;

        let mut breakdown = Vec::new();
        let mut unpriced_metals = Vec::new();
        let mut total_gross_value = Decimal::ZERO;
        let mut total_ppt = Decimal::ZERO;

        for component in &composition.components {
            let class = component.class();
            if class == MetalClass::Unpriced {
                warn!(
                    "Component {} of product {} has no priced class; excluded from valuation",
                    component.metal_name, product_id
                );
                unpriced_metals.push(component.metal_name.clone());
                continue;
            }

            total_ppt += component.quantity_ppt;

            let spot = rates.spot_for(class).unwrap_or_default();
            if spot <= Decimal::ZERO {
                // Partial data: the component contributes zero rather than
                // aborting the whole calculation.
                warn!(
                    "No current rate for {} (product {}); component valued at zero",
                    component.metal_name, product_id
                );
                breakdown.push(PriceBreakdownLine {
                    metal_id: component.metal_id,
                    metal: component.metal_name.clone(),
                    quantity_ppt: component.quantity_ppt,
                    unit: component.unit.clone(),
                    rate_per_gram: Decimal::ZERO,
                    local_value: Decimal::ZERO,
                });
                continue;
            }

            // Discount is a flat per-ounce subtraction and must be applied
            // before the troy-ounce-to-gram conversion.
            let adjusted = spot - formula.discount_for(class);
            let rate_per_gram = adjusted / GRAMS_PER_TROY_OUNCE;
            let weight_fraction = component.quantity_ppt / PARTS_PER_THOUSAND;
            let gross = rate_per_gram * weight_fraction * terms.payment_pct_for(class);

            total_gross_value += gross;

            breakdown.push(PriceBreakdownLine {
                metal_id: component.metal_id,
                metal: component.metal_name.clone(),
                quantity_ppt: component.quantity_ppt,
                unit: component.unit.clone(),
                rate_per_gram,
                local_value: gross * fx_factor,
            });
        }

        let cost_basis = terms.operating_cost + total_gross_value * terms.financial_cost_rate;
        let net_value = total_gross_value - cost_basis;
        let local_total = net_value * fx_factor;

        let weight_factor = composition.total_weight / PARTS_PER_THOUSAND;

        let (final_total, currency) = if country_code == LOCAL_COUNTRY {
            (local_total * weight_factor, LOCAL_CURRENCY)
        } else {
            (net_value * weight_factor, BASE_CURRENCY)
        };

        // A negative total is returned, not raised: callers need the number
        // for diagnostics but must not display it.
        let erroneous = final_total < Decimal::ZERO;
        if erroneous {
            warn!(
                "Negative price for product {} / company {}: {} {}",
                product_id, company_id, final_total, currency
            );
        }

        debug!(
            "Priced product {} for company {}: {} {} ({} components, {} unpriced)",
            product_id,
            company_id,
            final_total,
            currency,
            breakdown.len(),
            unpriced_metals.len()
        );

        let calculated_at = Utc::now();
        Ok(PriceCalculationResult {
            product_id,
            company_id,
            breakdown,
            total_gross_value,
            net_value,
            final_total,
            total_ppt,
            currency: currency.to_string(),
            erroneous,
            unpriced_metals,
            calculated_at,
            valid_until: calculated_at + Duration::minutes(PRICE_VALIDITY_MINUTES),
        })
    }
}
