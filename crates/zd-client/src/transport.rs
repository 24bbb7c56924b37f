//! The transport seam between API crates and the network.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::request::RequestMethod;

/// Performs one authenticated request and returns the raw response body.
///
/// Implementations own TLS, authentication headers and the classification of
/// non-success statuses into [`ErrorKind`](crate::ErrorKind) values. `path` is
/// either relative to the API root (`/custom_objects/car/records.json`) or an
/// absolute URL handed back by the server, which must be used verbatim.
///
/// Implementations must be safe to share between tasks; API clients hold one
/// and call it concurrently without extra synchronization.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request with an optional JSON body.
    async fn send(&self, method: RequestMethod, path: &str, body: Option<Bytes>) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, method: RequestMethod, path: &str, body: Option<Bytes>) -> Result<Bytes> {
        (**self).send(method, path, body).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, method: RequestMethod, path: &str, body: Option<Bytes>) -> Result<Bytes> {
        (**self).send(method, path, body).await
    }
}
