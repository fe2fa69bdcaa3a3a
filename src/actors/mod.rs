use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::actor_framework::Listing;
use crate::app_system::StoreConfig;
use crate::catalog::{CatalogError, CatalogStore};
use crate::clients::{CatalogClient, OrderClient};
use crate::domain::{Order, OrderId, OrderLine, Product, ProductCreate, ProductId, StatusUpdate};
use crate::messages::{CatalogRequest, OrderRequest, ServiceResponse, StoreRequest};
use crate::orders::{OrderBook, OrderError};

// =============================================================================
// STORE SERVICE
// =============================================================================

/// Single owner of the catalog and the order book.
///
/// Messages are handled one at a time, so an order placement validates and
/// commits against stock that no other request can touch in between.
pub struct StoreService {
    receiver: mpsc::Receiver<StoreRequest>,
    catalog: CatalogStore,
    orders: OrderBook,
}

impl StoreService {
    pub fn new(config: &StoreConfig) -> (Self, CatalogClient, OrderClient) {
        let (sender, receiver) = mpsc::channel(config.channel_capacity);
        let service = Self {
            receiver,
            catalog: CatalogStore::new(),
            orders: OrderBook::new(config.max_units_per_line, config.transitions),
        };
        let catalog_client = CatalogClient::new(sender.clone());
        let order_client = OrderClient::new(sender);
        (service, catalog_client, order_client)
    }

    #[instrument(name = "store_service", skip(self))]
    pub async fn run(mut self) {
        info!("StoreService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Catalog(request) => self.handle_catalog(request),
                StoreRequest::Orders(request) => self.handle_orders(request),
                StoreRequest::Shutdown => {
                    info!("StoreService shutting down");
                    break;
                }
                #[cfg(test)]
                StoreRequest::GetCounts { respond_to } => {
                    let _ = respond_to.send((self.catalog.len(), self.orders.len()));
                }
            }
        }

        info!("StoreService stopped");
    }

    fn handle_catalog(&mut self, request: CatalogRequest) {
        match request {
            CatalogRequest::AddProduct { product, respond_to } => {
                self.handle_add_product(product, respond_to);
            }
            CatalogRequest::GetProduct { id, respond_to } => {
                self.handle_get_product(id, respond_to);
            }
            CatalogRequest::ListProducts { respond_to } => {
                self.handle_list_products(respond_to);
            }
        }
    }

    fn handle_orders(&mut self, request: OrderRequest) {
        match request {
            OrderRequest::CreateOrder { lines, respond_to } => {
                self.handle_create_order(lines, respond_to);
            }
            OrderRequest::GetOrder { id, respond_to } => {
                self.handle_get_order(id, respond_to);
            }
            OrderRequest::ListOrders { respond_to } => {
                self.handle_list_orders(respond_to);
            }
            OrderRequest::UpdateStatus {
                id,
                update,
                respond_to,
            } => {
                self.handle_update_status(id, update, respond_to);
            }
        }
    }

    #[instrument(fields(product_name = %product.name, category = %product.category), skip(self, product, respond_to))]
    fn handle_add_product(
        &mut self,
        product: ProductCreate,
        respond_to: ServiceResponse<(ProductId, Product), CatalogError>,
    ) {
        debug!("Processing add_product request");

        let result = self.catalog.add_product(product);
        if let Err(e) = &result {
            error!(error = %e, "Product rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_id = %id), skip(self, respond_to))]
    fn handle_get_product(&self, id: ProductId, respond_to: ServiceResponse<Product, CatalogError>) {
        debug!("Processing get_product request");

        let result = self.catalog.get_product(id);
        match &result {
            Ok(product) => info!(product_name = %product.name, price = %product.price, "Product found"),
            Err(_) => debug!("Product not found"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Listing<(ProductId, Product)>, CatalogError>) {
        debug!("Processing list_products request");

        let products = self.catalog.list_products();
        info!(product_count = products.len(), "Listed products");

        let _ = respond_to.send(Ok(products));
    }

    /// Validation, stock reservation and recording happen inside this one
    /// handler call.
    #[instrument(fields(line_count = lines.len()), skip(self, lines, respond_to))]
    fn handle_create_order(&mut self, lines: Vec<OrderLine>, respond_to: ServiceResponse<(OrderId, Order), OrderError>) {
        info!("Processing create_order request");

        let result = self.orders.create_order(&mut self.catalog, lines);
        if let Err(e) = &result {
            error!(error = %e, "Order rejected");
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    fn handle_get_order(&self, id: OrderId, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing get_order request");

        let result = self.orders.get_order(id);
        match &result {
            Ok(order) => info!(total = %order.total, status = %order.status, "Order found"),
            Err(_) => debug!("Order not found"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_orders(&self, respond_to: ServiceResponse<Listing<(OrderId, Order)>, OrderError>) {
        debug!("Processing list_orders request");

        let orders = self.orders.list_orders();
        info!(order_count = orders.len(), "Listed orders");

        let _ = respond_to.send(Ok(orders));
    }

    #[instrument(fields(order_id = %id, target = %update.order_status), skip(self, update, respond_to))]
    fn handle_update_status(&mut self, id: OrderId, update: StatusUpdate, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing update_status request");

        let result = self.orders.update_status(id, &update);
        if let Err(e) = &result {
            error!(error = %e, "Status update rejected");
        }

        let _ = respond_to.send(result);
    }
}
