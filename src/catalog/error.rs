use thiserror::Error;

use crate::domain::ProductId;
use crate::error::ErrorKind;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },
    #[error("Store service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::InvalidCategory(_) => ErrorKind::InvalidCategory,
            CatalogError::InsufficientStock { .. } => ErrorKind::InvalidQuantity,
            CatalogError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
        }
    }
}
