pub mod money;
pub mod product;
pub mod order;

pub use money::*;
pub use product::*;
pub use order::*;
