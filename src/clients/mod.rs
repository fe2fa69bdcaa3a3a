//! Cloneable handles to the store service.

#[macro_use]
mod macros;
mod catalog_client;
mod order_client;

pub use catalog_client::*;
pub use order_client::*;
