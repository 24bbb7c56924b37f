use tracing::{debug, instrument};

use zendesk_client::{Context, RequestMethod, Transport};

use crate::envelope;
use crate::error::{Error, ErrorKind, Result};
use crate::record::Record;

impl<T: Transport> super::RecordClient<T> {
    /// Create a record in the `collection_key` collection.
    ///
    /// Server-assigned attributes on `record` (id, url, timestamps, audit
    /// users) are not sent. If `record.custom_object_key` is set it must equal
    /// `collection_key`. Not idempotent: each call creates a new record unless
    /// the server deduplicates on `external_id`.
    ///
    /// Returns the record as stored by the server.
    #[instrument(skip(self, ctx, record), fields(name = %record.name))]
    pub async fn create(
        &self,
        ctx: &Context,
        record: &Record,
        collection_key: &str,
    ) -> Result<Record> {
        self.create_inner(ctx, record, collection_key)
            .await
            .map_err(|e| e.in_operation("create", Some(collection_key)))
    }

    async fn create_inner(
        &self,
        ctx: &Context,
        record: &Record,
        collection_key: &str,
    ) -> Result<Record> {
        let path = format!("{}/records.json", super::collection_path(collection_key)?);

        if !record.custom_object_key.is_empty() && record.custom_object_key != collection_key {
            return Err(Error::new(ErrorKind::InvalidArgument(format!(
                "record belongs to `{}`, not `{collection_key}`",
                record.custom_object_key
            ))));
        }

        let body = envelope::encode(&record.creation_payload())?;
        let response = ctx
            .run(self.transport.send(RequestMethod::Post, &path, Some(body)))
            .await?;

        let created: Record = envelope::decode(&response)?;
        debug!(id = %created.id, "record created");
        Ok(created)
    }
}
