//! Search options and their encoding into URL query parameters.
//!
//! Options are plain `Serialize` structs. Each field's serde name is its query
//! parameter name, zero and empty values are skipped, and nested option groups
//! are `#[serde(flatten)]`ed so they land in the same query string as
//! top-level parameters. Fields are emitted in declaration order, so the same
//! options always encode to the same string.

use serde::Serialize;

use crate::error::Result;

/// Offset and cursor pagination controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationOptions {
    /// Records per page (offset pagination).
    #[serde(skip_serializing_if = "is_zero")]
    pub per_page: u32,

    /// 1-based page number (offset pagination).
    #[serde(skip_serializing_if = "is_zero")]
    pub page: u32,

    /// Records per page (cursor pagination).
    #[serde(rename = "page[size]", skip_serializing_if = "is_zero")]
    pub page_size: u32,

    /// Opaque cursor to read forward from.
    #[serde(rename = "page[after]", skip_serializing_if = "String::is_empty")]
    pub after_cursor: String,

    /// Opaque cursor to read backward from.
    #[serde(rename = "page[before]", skip_serializing_if = "String::is_empty")]
    pub before_cursor: String,
}

/// Options for the records autocomplete search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    #[serde(flatten)]
    pub pagination: PaginationOptions,

    /// Name prefix to match.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl SearchOptions {
    /// Options that match records by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the offset-pagination page size.
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.pagination.per_page = per_page;
        self
    }

    /// Set the offset-pagination page number.
    pub fn with_page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    /// Set the cursor-pagination page size.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Read forward from an opaque cursor.
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.pagination.after_cursor = cursor.into();
        self
    }

    /// Read backward from an opaque cursor.
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.pagination.before_cursor = cursor.into();
        self
    }
}

/// Render `options` as a URL query string (without the leading `?`).
///
/// Returns an empty string when every field is at its zero value. Fails with
/// `ErrorKind::Encoding` for values that have no query-string form, such as
/// nested sequences or unflattened structs.
pub fn encode_query<T: Serialize + ?Sized>(options: &T) -> Result<String> {
    Ok(serde_urlencoded::to_string(options)?)
}

/// Append the encoded `options` to `path`, adding `?` only when needed.
pub fn with_query<T: Serialize + ?Sized>(path: &str, options: &T) -> Result<String> {
    let query = encode_query(options)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}
