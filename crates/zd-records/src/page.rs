//! Pagination metadata returned next to a collection.

use serde::{Deserialize, Deserializer, Serialize};

use crate::record::nullable;

/// Pagination fields inlined at the top level of a collection response.
///
/// Links are opaque and passed through exactly as the server sent them. A
/// cursor without a `next_page` means there are no further pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Link to the previous page.
    #[serde(default, deserialize_with = "link", skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<String>,

    /// Link to the next page.
    #[serde(default, deserialize_with = "link", skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,

    /// Total number of matching records reported by the server.
    #[serde(default, deserialize_with = "nullable")]
    pub count: u64,
}

impl PageCursor {
    /// Returns true if the server offered a next page.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Returns true if the server offered a previous page.
    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }

    /// The next-page link, verbatim.
    pub fn next_link(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    /// The previous-page link, verbatim.
    pub fn previous_link(&self) -> Option<&str> {
        self.previous_page.as_deref()
    }
}

/// `null`, `""` and a missing key all mean "no link".
fn link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_links_pass_through() {
        let next = "https://acme.zendesk.com/api/v2/custom_objects/car/records/autocomplete?name=t&page=3";
        let page: PageCursor = serde_json::from_value(json!({
            "previous_page": "https://acme.zendesk.com/api/v2/custom_objects/car/records/autocomplete?name=t&page=1",
            "next_page": next,
            "count": 250
        }))
        .unwrap();

        assert!(page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.next_link(), Some(next));
        assert_eq!(page.count, 250);
    }

    #[test]
    fn test_empty_or_null_link_means_no_page() {
        let page: PageCursor =
            serde_json::from_value(json!({"next_page": "", "previous_page": null, "count": 2}))
                .unwrap();
        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.next_link(), None);
    }

    #[test]
    fn test_missing_fields_default() {
        let page: PageCursor = serde_json::from_value(json!({})).unwrap();
        assert_eq!(page, PageCursor::default());
    }
}
