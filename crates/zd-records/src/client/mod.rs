//! Custom object records client.
//!
//! `RecordClient` composes the options encoder and envelope codec with a
//! [`Transport`]. It keeps no state between calls: every operation issues a
//! fresh request and hands the decoded result to the caller.

use zendesk_client::{Credential, HttpClient, Transport};

use crate::error::{Error, ErrorKind, Result};

mod create;
mod search;

/// Client for the custom object records API.
///
/// Concurrent calls on one instance are safe as long as the transport is.
///
/// # Example
///
/// ```rust,ignore
/// use zendesk_records::{Context, Credential, Record, RecordClient};
///
/// let client = RecordClient::for_subdomain("acme", Credential::bearer(token))?;
/// let ctx = Context::background();
///
/// let created = client
///     .create(&ctx, &Record::new("Tesla").with_field("color", "red"), "car")
///     .await?;
/// let (records, page) = client.search(&ctx, "car", None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecordClient<T = HttpClient> {
    transport: T,
}

impl RecordClient<HttpClient> {
    /// Create a client for `https://{subdomain}.zendesk.com`.
    pub fn for_subdomain(subdomain: &str, credential: Credential) -> Result<Self> {
        let transport = HttpClient::for_subdomain(subdomain, credential)?;
        Ok(Self { transport })
    }
}

impl<T: Transport> RecordClient<T> {
    /// Create a client over an existing transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// `/custom_objects/{key}` with the key escaped as one path segment.
fn collection_path(collection_key: &str) -> Result<String> {
    if collection_key.trim().is_empty() {
        return Err(Error::new(ErrorKind::InvalidArgument(
            "collection key must not be empty".to_string(),
        )));
    }
    Ok(format!(
        "/custom_objects/{}",
        urlencoding::encode(collection_key)
    ))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_path() {
        assert_eq!(collection_path("car").unwrap(), "/custom_objects/car");
        assert_eq!(
            collection_path("odd key/..").unwrap(),
            "/custom_objects/odd%20key%2F.."
        );
    }

    #[test]
    fn test_empty_collection_key_rejected() {
        for key in ["", "   "] {
            let err = collection_path(key).unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_for_subdomain() {
        let client = RecordClient::for_subdomain("acme", Credential::bearer("t")).unwrap();
        assert_eq!(client.transport().base_url(), "https://acme.zendesk.com/api/v2");
    }
}
