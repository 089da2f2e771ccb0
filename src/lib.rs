pub mod db;

pub mod companies;
pub mod constants;
pub mod errors;
pub mod formulas;
pub mod metals;
pub mod pricing;
pub mod products;
pub mod rates;
pub mod schema;

pub use errors::{Error, Result};
pub use pricing::{PricingService, PricingServiceTrait};
