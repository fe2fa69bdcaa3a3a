use tokio::sync::mpsc;

use crate::actor_framework::Listing;
use crate::domain::{Order, OrderId, OrderLine, StatusUpdate};
use crate::messages::{OrderRequest, StoreRequest};
use crate::orders::OrderError;

/// Client for placing and managing orders.
///
/// Placement is a single request: the service checks and reserves stock for
/// every line before it answers.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl_store_client!(OrderClient);

client_method!(OrderClient => fn create_order(lines: Vec<OrderLine>) -> (OrderId, Order) as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn get_order(id: OrderId) -> Order as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn list_orders() -> Listing<(OrderId, Order)> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn update_status(id: OrderId, update: StatusUpdate) -> Order as OrderRequest::UpdateStatus, Error = OrderError);
