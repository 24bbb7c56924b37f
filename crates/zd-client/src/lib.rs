//! # zd-client
//!
//! Core HTTP transport infrastructure for Zendesk APIs.
//!
//! This crate provides the transport layer that API-specific crates send their
//! requests through:
//! - The [`Transport`] trait: `send(method, path, body) -> bytes`
//! - [`HttpClient`], a reqwest-backed transport with authentication,
//!   compression and status classification
//! - [`Context`], the caller-supplied execution context used for
//!   cancellation and deadlines
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (zd-records)                                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Context::run(...)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  dyn Transport / HttpClient                 │
//! │  - Holds credential + reqwest client                        │
//! │  - Resolves paths against https://{sub}.zendesk.com/api/v2  │
//! │  - Maps HTTP statuses to ErrorKind                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use zendesk_client::{Context, Credential, HttpClient, RequestMethod, Transport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zendesk_client::Error> {
//!     let client = HttpClient::for_subdomain(
//!         "acme",
//!         Credential::api_token("agent@acme.com", "secret"),
//!     )?;
//!
//!     let ctx = Context::background();
//!     let body = ctx
//!         .run(client.send(RequestMethod::Get, "/users/me.json", None))
//!         .await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod context;
mod credential;
mod error;
mod request;
mod transport;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use context::{CancelHandle, Context};
pub use credential::Credential;
pub use error::{Error, ErrorKind, Result};
pub use request::RequestMethod;
pub use transport::Transport;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("zendesk-api/", env!("CARGO_PKG_VERSION"));

/// Path prefix of the Zendesk REST API on every subdomain.
pub const API_PATH: &str = "/api/v2";
