use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId, OrderStatus};

use super::OrderError;

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Error = OrderError;

    /// Records an already priced order. Every new order starts out `Placed`
    /// with no dispatch date.
    fn from_create_params(params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            dispatch_date: None,
            status: OrderStatus::Placed,
            line_items: params.line_items,
            total: params.total,
        })
    }
}
