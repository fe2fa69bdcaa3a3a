use tracing::{debug, info, warn};

use crate::actor_framework::{Listing, Repository};
use crate::domain::{Product, ProductCreate, ProductId};

use super::CatalogError;

/// Owns every product and the product id counter.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Repository<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_product(&mut self, params: ProductCreate) -> Result<(ProductId, Product), CatalogError> {
        let (id, product) = self.products.create(params)?;
        info!(product_id = %id, product_name = %product.name, category = %product.category, "Product added");
        Ok((id, product))
    }

    pub fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.products.get(&id).cloned().ok_or(CatalogError::NotFound(id))
    }

    pub fn list_products(&self) -> Listing<(ProductId, Product)> {
        self.products.list()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Units on hand; an unknown product has none.
    #[cfg(test)]
    pub(crate) fn stock_of(&self, id: ProductId) -> u32 {
        self.products.get(&id).map(|p| p.quantity).unwrap_or(0)
    }

    pub(crate) fn peek(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Applies `delta` to the product's stock and returns the new level.
    /// Refuses any adjustment that would take stock below zero.
    pub(crate) fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> Result<u32, CatalogError> {
        let product = self.products.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        let adjusted = i64::from(product.quantity) + delta;
        let Ok(new_level) = u32::try_from(adjusted) else {
            warn!(product_id = %id, available = product.quantity, delta, "Stock adjustment refused");
            return Err(CatalogError::InsufficientStock {
                product_id: id,
                requested: delta.unsigned_abs(),
                available: product.quantity,
            });
        };
        product.quantity = new_level;
        debug!(product_id = %id, delta, remaining_stock = new_level, "Stock adjusted");
        Ok(new_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Money};

    fn lamp(category: &str) -> ProductCreate {
        ProductCreate::new("Lamp", Money::from_cents(1000), category, 5)
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut catalog = CatalogStore::new();
        let (a, _) = catalog.add_product(lamp("Premium")).unwrap();
        let (b, _) = catalog.add_product(lamp("Budget")).unwrap();
        assert_eq!(a, ProductId(1));
        assert_eq!(b, ProductId(2));
    }

    #[test]
    fn invalid_category_is_rejected_without_side_effects() {
        let mut catalog = CatalogStore::new();
        let err = catalog.add_product(lamp("Luxury")).unwrap_err();
        assert_eq!(err, CatalogError::InvalidCategory("Luxury".to_string()));
        assert_eq!(catalog.len(), 0);

        let (id, product) = catalog.add_product(lamp("Regular")).unwrap();
        assert_eq!(id, ProductId(1));
        assert_eq!(product.category, Category::Regular);
    }

    #[test]
    fn get_unknown_product_is_not_found() {
        let catalog = CatalogStore::new();
        assert_eq!(catalog.get_product(ProductId(7)), Err(CatalogError::NotFound(ProductId(7))));
    }

    #[test]
    fn empty_catalog_lists_as_empty() {
        let mut catalog = CatalogStore::new();
        assert!(catalog.list_products().is_empty());

        catalog.add_product(lamp("Premium")).unwrap();
        assert_eq!(catalog.list_products().len(), 1);
    }

    #[test]
    fn adjust_quantity_never_goes_negative() {
        let mut catalog = CatalogStore::new();
        let (id, _) = catalog.add_product(lamp("Premium")).unwrap();

        assert_eq!(catalog.adjust_quantity(id, -3), Ok(2));
        assert_eq!(
            catalog.adjust_quantity(id, -3),
            Err(CatalogError::InsufficientStock { product_id: id, requested: 3, available: 2 })
        );
        assert_eq!(catalog.stock_of(id), 2);
        assert_eq!(catalog.adjust_quantity(ProductId(99), -1), Err(CatalogError::NotFound(ProductId(99))));
    }
}
