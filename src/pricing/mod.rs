pub(crate) mod pricing_errors;
pub(crate) mod pricing_model;
pub(crate) mod pricing_service;
pub(crate) mod pricing_traits;

// Re-export the public interface
pub use pricing_errors::PricingError;
pub use pricing_model::{PriceBreakdownLine, PriceCalculationResult};
pub use pricing_service::PricingService;
pub use pricing_traits::PricingServiceTrait;
