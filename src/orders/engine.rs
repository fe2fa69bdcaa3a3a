use tracing::{error, info, warn};

use crate::actor_framework::{Listing, Repository};
use crate::catalog::CatalogStore;
use crate::domain::{LineItem, Order, OrderCreate, OrderId, OrderLine, OrderStatus, StatusUpdate};

use super::pricing::{order_total, premium_count, MAX_UNITS_PER_LINE};
use super::status::{parse_dispatch_date, TransitionPolicy};
use super::OrderError;

/// Owns every order and the order id counter.
///
/// Placement reads and writes the [`CatalogStore`] it is handed. The caller
/// must hold exclusive access to both for the whole call; the store service
/// guarantees that by processing one request at a time.
#[derive(Debug)]
pub struct OrderBook {
    orders: Repository<Order>,
    max_units_per_line: u32,
    transitions: TransitionPolicy,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(MAX_UNITS_PER_LINE, TransitionPolicy::default())
    }
}

impl OrderBook {
    pub fn new(max_units_per_line: u32, transitions: TransitionPolicy) -> Self {
        Self {
            orders: Repository::new(),
            max_units_per_line,
            transitions,
        }
    }

    /// Validates and prices every line, then reserves stock for all of them
    /// and records the order. Nothing is touched unless the whole set
    /// validates and its total fits in [`Money`](crate::domain::Money).
    pub fn create_order(
        &mut self,
        catalog: &mut CatalogStore,
        mut lines: Vec<OrderLine>,
    ) -> Result<(OrderId, Order), OrderError> {
        lines.sort_by_key(|line| line.product_id);
        reject_duplicates(&lines)?;

        let line_items = self.validate_lines(catalog, &lines)?;
        let total = order_total(&line_items).ok_or_else(|| {
            warn!(line_count = line_items.len(), "Order total out of range");
            OrderError::TotalOutOfRange
        })?;

        reserve_stock(catalog, &lines)?;

        let premium_lines = premium_count(&line_items);
        let (id, order) = self.orders.create(OrderCreate { line_items, total })?;

        info!(order_id = %id, total = %order.total, premium_lines, "Order placed");
        Ok((id, order))
    }

    /// Read-only pass: checks every line against current stock and snapshots
    /// the products it refers to.
    fn validate_lines(&self, catalog: &CatalogStore, lines: &[OrderLine]) -> Result<Vec<LineItem>, OrderError> {
        lines
            .iter()
            .map(|line| {
                let product = catalog.peek(line.product_id);
                let available = product.map(|p| p.quantity).unwrap_or(0);

                let product = match product {
                    Some(product) if line.quantity <= self.max_units_per_line && line.quantity <= available => {
                        product
                    }
                    _ => {
                        warn!(
                            product_id = %line.product_id,
                            requested = line.quantity,
                            available,
                            limit = self.max_units_per_line,
                            "Line item rejected"
                        );
                        return Err(OrderError::InvalidQuantity {
                            product_id: line.product_id,
                            requested: line.quantity,
                            available,
                        });
                    }
                };

                Ok(LineItem {
                    name: product.name.clone(),
                    price: product.price,
                    category: product.category,
                    quantity: line.quantity,
                })
            })
            .collect()
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders.get(&id).cloned().ok_or(OrderError::NotFound(id))
    }

    pub fn list_orders(&self) -> Listing<(OrderId, Order)> {
        self.orders.list()
    }

    pub fn update_status(&mut self, id: OrderId, update: &StatusUpdate) -> Result<Order, OrderError> {
        let target: OrderStatus = update.order_status.parse()?;
        let dispatch_date = match target {
            OrderStatus::Dispatched => Some(parse_dispatch_date(update.dispatch_date.as_deref())?),
            _ => None,
        };

        let order = self.orders.get_mut(&id).ok_or(OrderError::NotFound(id))?;
        if !order.status.can_transition_to(target, self.transitions) {
            warn!(order_id = %id, from = %order.status, to = %target, "Transition refused");
            return Err(OrderError::InvalidStatus(format!(
                "cannot move {} from {} to {}",
                id, order.status, target
            )));
        }

        order.status = target;
        if let Some(date) = dispatch_date {
            order.dispatch_date = Some(date);
        }

        info!(order_id = %id, status = %order.status, "Order status updated");
        Ok(order.clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

/// Takes every line's units out of stock. Expects `lines` already validated
/// against `catalog`; if a decrement is refused anyway, the ones already made
/// are put back before the failure is returned.
fn reserve_stock(catalog: &mut CatalogStore, lines: &[OrderLine]) -> Result<(), OrderError> {
    for (done, line) in lines.iter().enumerate() {
        if let Err(e) = catalog.adjust_quantity(line.product_id, -i64::from(line.quantity)) {
            error!(product_id = %line.product_id, error = %e, "Stock reservation failed after validation");
            for reserved in &lines[..done] {
                let _ = catalog.adjust_quantity(reserved.product_id, i64::from(reserved.quantity));
            }
            return Err(OrderError::StockReservation(e));
        }
    }
    Ok(())
}

/// Expects `lines` sorted by product id.
fn reject_duplicates(lines: &[OrderLine]) -> Result<(), OrderError> {
    match lines.windows(2).find(|pair| pair[0].product_id == pair[1].product_id) {
        Some(pair) => {
            warn!(product_id = %pair[0].product_id, "Duplicate line item");
            Err(OrderError::DuplicateLineItem(pair[0].product_id))
        }
        None => Ok(()),
    }
}
