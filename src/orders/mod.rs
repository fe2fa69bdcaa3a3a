//! Order engine: placement against catalog stock, pricing, and status updates.

mod engine;
pub mod entity;
pub mod error;
pub mod pricing;
pub mod status;

pub use engine::*;
pub use error::*;
pub use status::*;
