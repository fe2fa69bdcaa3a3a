use crate::actor_framework::Entity;
use crate::domain::{Category, Product, ProductCreate, ProductId};

use super::CatalogError;

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type Error = CatalogError;

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// `InvalidCategory` when the category text is not one of
    /// `Premium`, `Regular` or `Budget`.
    fn from_create_params(params: ProductCreate) -> Result<Self, CatalogError> {
        let category: Category = params.category.parse()?;
        Ok(Self {
            name: params.name,
            price: params.price,
            category,
            quantity: params.quantity,
        })
    }
}
