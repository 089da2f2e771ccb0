use thiserror::Error;

use crate::errors::DatabaseError;

pub type Result<T> = std::result::Result<T, CompanyError>;

#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("Company not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Database error: {0}")]
    DatabaseConnectionError(#[from] DatabaseError),

    #[error("Invalid company data: {0}")]
    InvalidData(String),
}
