use thiserror::Error;

use crate::catalog::CatalogError;
use crate::domain::{OrderId, ProductId};
use crate::error::ErrorKind;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Invalid dispatch date: {0}")]
    InvalidDispatchDate(String),
    #[error("Invalid quantity for {product_id}: requested {requested}, available {available}")]
    InvalidQuantity {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },
    #[error("Duplicate line item for {0}")]
    DuplicateLineItem(ProductId),
    #[error("Order total out of range")]
    TotalOutOfRange,
    #[error("Stock reservation failed: {0}")]
    StockReservation(CatalogError),
    #[error("Store service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::InvalidStatus(_) => ErrorKind::InvalidStatus,
            OrderError::InvalidDispatchDate(_) => ErrorKind::InvalidDispatchDate,
            OrderError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            OrderError::DuplicateLineItem(_) => ErrorKind::DuplicateLineItem,
            OrderError::TotalOutOfRange => ErrorKind::TotalOutOfRange,
            OrderError::StockReservation(e) => e.kind(),
            OrderError::ServiceUnavailable(_) => ErrorKind::ServiceUnavailable,
        }
    }
}
