use thiserror::Error;

use crate::companies::CompanyError;
use crate::products::ProductError;

pub type Result<T> = std::result::Result<T, PricingError>;

/// Failure taxonomy of a price calculation. Only absent inputs abort a
/// calculation; feed outages and partial rate data degrade inside the rate
/// provider and never surface here.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Product not found: {0}")]
    ProductNotFound(i32),

    #[error("Company not found: {0}")]
    CompanyNotFound(i32),

    #[error("Product {0} has no metal components")]
    EmptyComposition(i32),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProductError> for PricingError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => PricingError::ProductNotFound(id),
            ProductError::EmptyComposition(id) => PricingError::EmptyComposition(id),
            other => PricingError::Internal(other.to_string()),
        }
    }
}

impl From<CompanyError> for PricingError {
    fn from(err: CompanyError) -> Self {
        match err {
            CompanyError::NotFound(id) => PricingError::CompanyNotFound(id),
            other => PricingError::Internal(other.to_string()),
        }
    }
}

impl From<crate::errors::Error> for PricingError {
    fn from(err: crate::errors::Error) -> Self {
        PricingError::Internal(err.to_string())
    }
}
