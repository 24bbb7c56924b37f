//! # zd-records
//!
//! Client for Zendesk custom object records.
//!
//! ## Features
//!
//! - **Create** - Create a record in a custom object collection
//! - **Autocomplete search** - Search records by name, one page at a time
//! - **Pagination** - Follow server-issued page links, or collect every page
//!
//! ## Example
//!
//! ```rust,ignore
//! use zendesk_client::{Context, Credential};
//! use zendesk_records::{Record, RecordClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zendesk_records::Error> {
//!     let client = RecordClient::for_subdomain(
//!         "acme",
//!         Credential::api_token("agent@acme.com", "secret"),
//!     )?;
//!     let ctx = Context::background();
//!
//!     // Create
//!     let record = Record::new("Acme").with_field("tier", "gold");
//!     let created = client.create(&ctx, &record, "accounts").await?;
//!
//!     // Search
//!     let options = SearchOptions::by_name("Acme").with_per_page(25);
//!     let (records, page) = client.search(&ctx, "accounts", Some(&options)).await?;
//!
//!     // Next page, if the server offered one
//!     if let Some((more, _)) = client.search_next(&ctx, "accounts", &page).await? {
//!         println!("{} more", more.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
pub mod envelope;
mod error;
pub mod options;
mod page;
mod record;

// Main client
pub use client::RecordClient;

// Envelope codec
pub use envelope::Resource;

// Error types
pub use error::{Error, ErrorContext, ErrorKind, Result};

// Query options
pub use options::{PaginationOptions, SearchOptions};

// Data model
pub use page::PageCursor;
pub use record::Record;

// Re-export zd-client types that users might need
pub use zendesk_client::{CancelHandle, ClientConfig, Context, Credential, HttpClient, Transport};
