use tokio::sync::oneshot;

use crate::actor_framework::Listing;
use crate::catalog::CatalogError;
use crate::domain::{Order, OrderId, OrderLine, Product, ProductCreate, ProductId, StatusUpdate};
use crate::orders::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed message enums for the store service. Each variant includes parameters
/// and a oneshot channel for the response.

#[derive(Debug)]
pub enum CatalogRequest {
    AddProduct {
        product: ProductCreate,
        respond_to: ServiceResponse<(ProductId, Product), CatalogError>,
    },
    GetProduct {
        id: ProductId,
        respond_to: ServiceResponse<Product, CatalogError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Listing<(ProductId, Product)>, CatalogError>,
    },
}

#[derive(Debug)]
pub enum OrderRequest {
    CreateOrder {
        lines: Vec<OrderLine>,
        respond_to: ServiceResponse<(OrderId, Order), OrderError>,
    },
    GetOrder {
        id: OrderId,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    ListOrders {
        respond_to: ServiceResponse<Listing<(OrderId, Order)>, OrderError>,
    },
    UpdateStatus {
        id: OrderId,
        update: StatusUpdate,
        respond_to: ServiceResponse<Order, OrderError>,
    },
}

/// Everything the store service accepts on its single inbox.
#[derive(Debug)]
pub enum StoreRequest {
    Catalog(CatalogRequest),
    Orders(OrderRequest),
    Shutdown,
    #[cfg(test)]
    GetCounts {
        respond_to: oneshot::Sender<(usize, usize)>,
    },
}

impl From<CatalogRequest> for StoreRequest {
    fn from(request: CatalogRequest) -> Self {
        StoreRequest::Catalog(request)
    }
}

impl From<OrderRequest> for StoreRequest {
    fn from(request: OrderRequest) -> Self {
        StoreRequest::Orders(request)
    }
}
