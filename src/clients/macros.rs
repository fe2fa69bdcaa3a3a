/// Generate client methods with oneshot channel boilerplate and automatic tracing.
/// A closed inbox or a dropped responder becomes the error type's
/// `ServiceUnavailable` variant.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    }.into())
                    .await
                    .map_err(|_| <$error_type>::ServiceUnavailable("service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| <$error_type>::ServiceUnavailable("service dropped request".to_string()))?
            }
        }
    };
}

/// Shared constructor and shutdown for clients that talk to the store inbox.
macro_rules! impl_store_client {
    ($client:ident) => {
        impl $client {
            pub fn new(sender: tokio::sync::mpsc::Sender<crate::messages::StoreRequest>) -> Self {
                Self { sender }
            }

            /// Manual method for special cases (no response needed)
            #[tracing::instrument(skip(self))]
            pub async fn shutdown(&self) -> Result<(), String> {
                tracing::debug!("Sending shutdown request");
                self.sender
                    .send(crate::messages::StoreRequest::Shutdown)
                    .await
                    .map_err(|e| e.to_string())
            }

            #[cfg(test)]
            pub(crate) fn sender(&self) -> &tokio::sync::mpsc::Sender<crate::messages::StoreRequest> {
                &self.sender
            }
        }
    };
}
