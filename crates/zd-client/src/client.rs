//! reqwest-backed transport with Zendesk-specific handling.
//!
//! ## Security
//!
//! - Credentials are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::credential::Credential;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestMethod;
use crate::transport::Transport;

/// HTTP transport for Zendesk APIs.
///
/// Holds one pooled `reqwest::Client`; cloning shares the pool. Safe for
/// concurrent use from many tasks.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    base_url: String,
    origin: url::Origin,
    credential: Credential,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a transport rooted at `base_url` (e.g. `https://acme.zendesk.com/api/v2`).
    pub fn new(base_url: impl Into<String>, credential: Credential) -> Result<Self> {
        Self::with_config(base_url, credential, ClientConfig::default())
    }

    /// Create a transport for `https://{subdomain}.zendesk.com/api/v2`.
    pub fn for_subdomain(subdomain: &str, credential: Credential) -> Result<Self> {
        let valid = !subdomain.is_empty()
            && subdomain.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(Error::new(ErrorKind::Config(format!(
                "invalid subdomain: {subdomain:?}"
            ))));
        }
        Self::new(
            format!("https://{subdomain}.zendesk.com{}", crate::API_PATH),
            credential,
        )
    }

    /// Create a transport with custom configuration.
    pub fn with_config(
        base_url: impl Into<String>,
        credential: Credential,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let origin = url::Url::parse(&base_url)?.origin();

        if !credential.is_valid() {
            return Err(Error::new(ErrorKind::Config(
                "credential has an empty email or secret".to_string(),
            )));
        }

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.accept_compressed)
            .deflate(config.accept_compressed)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            base_url,
            origin,
            credential,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a path.
    ///
    /// Absolute URLs (such as pagination links returned by the server) are
    /// used verbatim, but only when they share the base URL's scheme, host
    /// and port. Credentials go to no other origin. Anything else is joined
    /// to the base URL.
    pub fn url(&self, path: &str) -> Result<String> {
        if path.starts_with("http://") || path.starts_with("https://") {
            let link = url::Url::parse(path)?;
            if link.origin() != self.origin {
                return Err(Error::new(ErrorKind::InvalidUrl(format!(
                    "{path} is not under {}",
                    self.base_url
                ))));
            }
            Ok(path.to_string())
        } else if path.starts_with('/') {
            Ok(format!("{}{}", self.base_url, path))
        } else {
            Ok(format!("{}/{}", self.base_url, path))
        }
    }

    async fn execute(
        &self,
        method: RequestMethod,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<Bytes> {
        let mut req = self
            .credential
            .apply(self.inner.request(method.to_reqwest(), url))
            .header("Accept", "application/json");

        if let Some(body) = body {
            req = req.header("Content-Type", "application/json").body(body);
        }

        if self.config.enable_tracing {
            debug!(%method, url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs);

            return Err(Error::new(ErrorKind::RateLimited { retry_after }));
        }

        if !response.status().is_success() {
            let message = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    debug!(status, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            return Err(Error::new(status_error(status, url, message)));
        }

        response.bytes().await.map_err(Into::into)
    }
}

#[async_trait]
impl Transport for HttpClient {
    #[instrument(skip(self, body))]
    async fn send(&self, method: RequestMethod, path: &str, body: Option<Bytes>) -> Result<Bytes> {
        let url = self.url(path)?;
        self.execute(method, &url, body).await
    }
}

/// Map a non-success status to the matching error kind.
fn status_error(status: u16, url: &str, message: String) -> ErrorKind {
    match status {
        401 => ErrorKind::Authentication(message),
        403 => ErrorKind::Authorization(message),
        404 => ErrorKind::NotFound(url.to_string()),
        _ => ErrorKind::Http { status, message },
    }
}
