//! # zendesk-api
//!
//! Typed Zendesk API client library for Rust.
//!
//! ## Security
//!
//! - Credentials are redacted in Debug output
//! - Tracing spans skip request bodies and credentials
//!
//! ## Crates
//!
//! - **zendesk-client** - HTTP transport, authentication, execution context
//! - **zendesk-records** - Custom object records: create, autocomplete search, pagination
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zendesk_api::{Context, Credential, Record, RecordClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RecordClient::for_subdomain(
//!         "acme",
//!         Credential::api_token("agent@acme.com", std::env::var("ZENDESK_TOKEN")?),
//!     )?;
//!     let ctx = Context::background().with_timeout(std::time::Duration::from_secs(10));
//!
//!     let created = client
//!         .create(&ctx, &Record::new("Acme").with_field("tier", "gold"), "accounts")
//!         .await?;
//!     println!("created {}", created.id);
//!
//!     let options = SearchOptions::by_name("Acme").with_per_page(25);
//!     for record in client.search_all(&ctx, "accounts", Some(&options)).await? {
//!         println!("{} {}", record.id, record.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use zendesk_client as client;
#[cfg(feature = "records")]
pub use zendesk_records as records;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use zendesk_client::{ClientConfig, Context, Credential, HttpClient, Transport};
#[cfg(feature = "records")]
pub use zendesk_records::{PageCursor, Record, RecordClient, SearchOptions};
