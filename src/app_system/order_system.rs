use tracing::{error, info, instrument};

use crate::actors::StoreService;
use crate::clients::{CatalogClient, OrderClient};

use super::StoreConfig;

/// The main application system: starts the store service, hands out clients,
/// and handles shutdown.
pub struct OrderSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "order_system", skip(config))]
    pub fn new(config: StoreConfig) -> Self {
        info!(
            channel_capacity = config.channel_capacity,
            max_units_per_line = config.max_units_per_line,
            transitions = ?config.transitions,
            "Starting order system"
        );

        let (service, catalog_client, order_client) = StoreService::new(&config);
        let handle = tokio::spawn(service.run());

        info!("Order system started successfully");

        Self {
            catalog_client,
            order_client,
            handle,
        }
    }

    /// Stops the service and waits for it to finish. Clients cloned out of
    /// the system fail with `ServiceUnavailable` afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        // An already stopped service is not an error here.
        let _ = self.order_client.shutdown().await;
        drop(self.order_client);
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Store service task failed");
            return Err(format!("Store service task failed: {e}"));
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
