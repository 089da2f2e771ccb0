use thiserror::Error;

use crate::errors::DatabaseError;

pub type Result<T> = std::result::Result<T, ProductError>;

#[derive(Error, Debug)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Product {0} has no metal components")]
    EmptyComposition(i32),

    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Database error: {0}")]
    DatabaseConnectionError(#[from] DatabaseError),
}
