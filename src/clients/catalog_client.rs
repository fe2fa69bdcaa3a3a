use tokio::sync::mpsc;

use crate::actor_framework::Listing;
use crate::catalog::CatalogError;
use crate::domain::{Product, ProductCreate, ProductId};
use crate::messages::{CatalogRequest, StoreRequest};

/// Client for the catalog side of the store service.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl_store_client!(CatalogClient);

client_method!(CatalogClient => fn add_product(product: ProductCreate) -> (ProductId, Product) as CatalogRequest::AddProduct, Error = CatalogError);
client_method!(CatalogClient => fn get_product(id: ProductId) -> Product as CatalogRequest::GetProduct, Error = CatalogError);
client_method!(CatalogClient => fn list_products() -> Listing<(ProductId, Product)> as CatalogRequest::ListProducts, Error = CatalogError);
