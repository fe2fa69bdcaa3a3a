mod actor_framework;
mod actors;
mod app_system;
mod catalog;
mod clients;
mod domain;
mod error;
mod messages;
mod orders;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, OrderSystem, StoreConfig};
use crate::domain::{Money, OrderLine, ProductCreate, StatusUpdate};
use crate::error::ErrorBody;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting application with complete order system");

    let system = OrderSystem::new(StoreConfig::from_env());

    let span = tracing::info_span!("catalog_setup");
    let product_ids = async {
        let mut ids = Vec::new();
        for product in [
            ProductCreate::new("Espresso Machine", Money::from_major_minor(10, 0), "Premium", 5),
            ProductCreate::new("Grinder", Money::from_major_minor(20, 0), "Premium", 5),
            ProductCreate::new("Tamper", Money::from_major_minor(5, 0), "Premium", 5),
            ProductCreate::new("Filter Papers", Money::from_major_minor(2, 49), "Budget", 100),
        ] {
            let (id, product) = system.catalog_client.add_product(product).await.map_err(|e| e.to_string())?;
            info!(product_id = %id, product_name = %product.name, "Product created successfully");
            ids.push(id);
        }
        Ok::<_, String>(ids)
    }
    .instrument(span)
    .await?;

    // Unknown categories are rejected without consuming an id
    if let Err(e) = system
        .catalog_client
        .add_product(ProductCreate::new("Mystery Box", Money::from_cents(999), "Deluxe", 1))
        .await
    {
        error!(error = ?ErrorBody::from(&e), "Product creation failed (expected)");
    }

    let listing = system.catalog_client.list_products().await.map_err(|e| e.to_string())?;
    info!(product_count = listing.len(), "Retrieved catalog");

    let span = tracing::info_span!("order_processing");
    let order_id = async {
        info!("Processing order through order system");
        let lines = product_ids[..3].iter().map(|id| OrderLine::new(*id, 1)).collect();
        let (order_id, order) = system.order_client.create_order(lines).await.map_err(|e| e.to_string())?;
        info!(order_id = %order_id, total = %order.total, "Order processed successfully");
        Ok::<_, String>(order_id)
    }
    .instrument(span)
    .await?;

    // Duplicate lines are rejected and leave stock untouched
    let duplicate = vec![OrderLine::new(product_ids[3], 2), OrderLine::new(product_ids[3], 1)];
    if let Err(e) = system.order_client.create_order(duplicate).await {
        error!(error = ?ErrorBody::from(&e), "Order processing failed (expected)");
    }

    let product = system
        .catalog_client
        .get_product(product_ids[0])
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product_ids[0], stock_level = product.quantity, "Stock after ordering");

    let order = system
        .order_client
        .update_status(order_id, StatusUpdate::dispatched_on("16-10-2026"))
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id = %order_id, status = %order.status, dispatch_date = ?order.dispatch_date, "Order dispatched");

    system
        .order_client
        .update_status(order_id, StatusUpdate::new("Completed"))
        .await
        .map_err(|e| e.to_string())?;

    let order = system.order_client.get_order(order_id).await.map_err(|e| e.to_string())?;
    info!(order_id = %order_id, status = %order.status, line_items = order.line_items.len(), "Fetched order");

    let orders = system.order_client.list_orders().await.map_err(|e| e.to_string())?;
    info!(order_count = orders.len(), "Retrieved order list");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
