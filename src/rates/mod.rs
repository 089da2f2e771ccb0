pub(crate) mod providers;
pub(crate) mod rates_constants;
pub(crate) mod rates_errors;
pub(crate) mod rates_model;
pub(crate) mod rates_repository;
pub(crate) mod rates_service;
pub(crate) mod rates_traits;

// Re-export the public interface
pub use providers::metal_price_api_client::MetalPriceApiClient;
pub use providers::RateFeed;
pub use rates_constants::*;
pub use rates_errors::RateError;
pub use rates_model::{ApiUsageStats, RateSnapshot};
pub use rates_repository::RateRepository;
pub use rates_service::RateService;
pub use rates_traits::{RateRepositoryTrait, RateServiceTrait};
