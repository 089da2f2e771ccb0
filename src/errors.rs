use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::companies::CompanyError;
use crate::pricing::PricingError;
use crate::products::ProductError;
use crate::rates::RateError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pricing core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Rate operation failed: {0}")]
    Rate(#[from] RateError),

    #[error("Company operation failed: {0}")]
    Company(#[from] CompanyError),

    #[error("Product operation failed: {0}")]
    Product(#[from] ProductError),

    #[error("Price calculation failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(#[from] diesel::result::ConnectionError),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    QueryFailed(#[from] DieselError),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),
}

// Implement From for DieselError to Error directly
impl From<DieselError> for Error {
    fn from(err: DieselError) -> Self {
        Error::Database(DatabaseError::QueryFailed(err))
    }
}

impl From<r2d2::Error> for Error {
    fn from(e: r2d2::Error) -> Self {
        Error::Database(DatabaseError::PoolCreationFailed(e))
    }
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Validation(err.to_string())
    }
}
