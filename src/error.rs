use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::orders::OrderError;

/// Failure category reported to callers alongside a human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    InvalidCategory,
    InvalidStatus,
    InvalidDispatchDate,
    InvalidQuantity,
    DuplicateLineItem,
    TotalOutOfRange,
    ServiceUnavailable,
}

/// Structured failure handed back across the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CatalogError> for ErrorBody {
    fn from(err: &CatalogError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<&OrderError> for ErrorBody {
    fn from(err: &OrderError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
