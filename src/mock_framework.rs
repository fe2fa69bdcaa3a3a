//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_clients`] to get clients and the receiver they send to.
//! Then use [`expect_catalog`] or [`expect_order`] to assert what was sent and
//! answer (or drop) the request.

use tokio::sync::mpsc;

use crate::clients::{CatalogClient, OrderClient};
use crate::messages::{CatalogRequest, OrderRequest, StoreRequest};

/// Creates clients wired to a receiver the test controls instead of a running
/// store service.
pub fn create_mock_clients(buffer_size: usize) -> (CatalogClient, OrderClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CatalogClient::new(sender.clone()), OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a catalog request
pub async fn expect_catalog(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<CatalogRequest> {
    match receiver.recv().await {
        Some(StoreRequest::Catalog(request)) => Some(request),
        _ => None,
    }
}

/// Helper to verify that the next message is an order request
pub async fn expect_order(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<OrderRequest> {
    match receiver.recv().await {
        Some(StoreRequest::Orders(request)) => Some(request),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;
    use crate::domain::{Money, OrderId, OrderLine, ProductCreate, ProductId, StatusUpdate};
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_add_product_round_trip() {
        let (catalog_client, _order_client, mut receiver) = create_mock_clients(10);

        let task = tokio::spawn(async move {
            catalog_client
                .add_product(ProductCreate::new("Lamp", Money::from_cents(1000), "Gold", 1))
                .await
        });

        match expect_catalog(&mut receiver).await {
            Some(CatalogRequest::AddProduct { product, respond_to }) => {
                assert_eq!(product.category, "Gold");
                respond_to
                    .send(Err(CatalogError::InvalidCategory(product.category)))
                    .unwrap();
            }
            other => panic!("Expected AddProduct, got {:?}", other),
        }

        let result = task.await.unwrap();
        assert_eq!(result, Err(CatalogError::InvalidCategory("Gold".to_string())));
    }

    #[tokio::test]
    async fn test_order_requests_carry_their_payload() {
        let (_catalog_client, order_client, mut receiver) = create_mock_clients(10);

        let task = tokio::spawn(async move {
            order_client
                .update_status(OrderId(4), StatusUpdate::dispatched_on("01-02-2024"))
                .await
        });

        match expect_order(&mut receiver).await {
            Some(OrderRequest::UpdateStatus { id, update, respond_to }) => {
                assert_eq!(id, OrderId(4));
                assert_eq!(update.dispatch_date.as_deref(), Some("01-02-2024"));
                // Dropping the responder simulates a service that died mid-request.
                drop(respond_to);
            }
            other => panic!("Expected UpdateStatus, got {:?}", other),
        }

        let err = task.await.unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[tokio::test]
    async fn test_closed_inbox_is_service_unavailable() {
        let (_catalog_client, order_client, receiver) = create_mock_clients(1);
        drop(receiver);

        let err = order_client
            .create_order(vec![OrderLine::new(ProductId(1), 1)])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    }
}
