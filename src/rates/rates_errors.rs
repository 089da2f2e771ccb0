use thiserror::Error;

use crate::errors::DatabaseError;

pub type Result<T> = std::result::Result<T, RateError>;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Database error: {0}")]
    DatabaseConnectionError(#[from] DatabaseError),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("API call budget exhausted")]
    BudgetExhausted,
}
