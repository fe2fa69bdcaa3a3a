//! Product catalog: the product map, its id counter, and stock adjustment.

pub mod entity;
pub mod error;
mod store;

pub use error::*;
pub use store::*;
