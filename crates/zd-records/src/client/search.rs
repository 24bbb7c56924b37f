use std::collections::HashSet;

use tracing::{debug, instrument};

use zendesk_client::{Context, RequestMethod, Transport};

use crate::envelope;
use crate::error::{Error, ErrorKind, Result};
use crate::options::{with_query, SearchOptions};
use crate::page::PageCursor;
use crate::record::Record;

impl<T: Transport> super::RecordClient<T> {
    /// Autocomplete search over the `collection_key` collection.
    ///
    /// `None` means default options: no name filter, the server's default
    /// page. Records come back in the server's relevance order. The returned
    /// cursor tells whether another page exists; see [`search_next`].
    ///
    /// [`search_next`]: Self::search_next
    #[instrument(skip(self, ctx, options))]
    pub async fn search(
        &self,
        ctx: &Context,
        collection_key: &str,
        options: Option<&SearchOptions>,
    ) -> Result<(Vec<Record>, PageCursor)> {
        self.search_inner(ctx, collection_key, options)
            .await
            .map_err(|e| e.in_operation("search", Some(collection_key)))
    }

    async fn search_inner(
        &self,
        ctx: &Context,
        collection_key: &str,
        options: Option<&SearchOptions>,
    ) -> Result<(Vec<Record>, PageCursor)> {
        let default_options = SearchOptions::default();
        let options = options.unwrap_or(&default_options);

        let path = format!(
            "{}/records/autocomplete",
            super::collection_path(collection_key)?
        );
        let path = with_query(&path, options)?;

        self.fetch_page(ctx, &path).await
    }

    /// Fetch the page after `cursor`, a cursor returned by a search over
    /// `collection_key`.
    ///
    /// The server's `next_page` link is requested exactly as given. Returns
    /// `None` without any request when the cursor has no next page.
    #[instrument(skip(self, ctx, cursor))]
    pub async fn search_next(
        &self,
        ctx: &Context,
        collection_key: &str,
        cursor: &PageCursor,
    ) -> Result<Option<(Vec<Record>, PageCursor)>> {
        let Some(link) = cursor.next_link() else {
            return Ok(None);
        };
        self.fetch_page(ctx, link)
            .await
            .map(Some)
            .map_err(|e| e.in_operation("search_next", Some(collection_key)))
    }

    /// Run a search and follow `next_page` links until the last page.
    ///
    /// Records are returned in the order the server produced them. Fails
    /// if the server hands back a link it already served.
    #[instrument(skip(self, ctx, options))]
    pub async fn search_all(
        &self,
        ctx: &Context,
        collection_key: &str,
        options: Option<&SearchOptions>,
    ) -> Result<Vec<Record>> {
        let (mut all_records, mut cursor) = self.search(ctx, collection_key, options).await?;
        let mut seen = HashSet::new();

        while let Some(link) = cursor.next_page.take() {
            if !seen.insert(link.clone()) {
                return Err(Error::new(ErrorKind::Decode(format!(
                    "pagination loop: `{link}` was already fetched"
                )))
                .in_operation("search_all", Some(collection_key)));
            }

            let (records, next) = self
                .fetch_page(ctx, &link)
                .await
                .map_err(|e| e.in_operation("search_all", Some(collection_key)))?;
            all_records.extend(records);
            cursor = next;
        }

        debug!(total = all_records.len(), "search exhausted all pages");
        Ok(all_records)
    }

    async fn fetch_page(&self, ctx: &Context, path: &str) -> Result<(Vec<Record>, PageCursor)> {
        let response = ctx
            .run(self.transport.send(RequestMethod::Get, path, None))
            .await?;

        let (records, page) = envelope::decode_page::<Record>(&response)?;
        debug!(
            count = records.len(),
            has_next = page.has_next(),
            "search page received"
        );
        Ok((records, page))
    }
}
