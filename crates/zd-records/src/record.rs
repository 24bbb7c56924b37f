//! Custom object record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One record in a custom object collection.
///
/// `id`, `url`, the timestamps and the `*_by_user_id` fields are assigned by
/// the server. Empty strings stand for "not set" and are left out of the
/// serialized JSON, so a record built for `create` only carries what the
/// caller filled in.
///
/// `custom_object_fields` is opaque to the client: its schema lives on the
/// server and values are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub custom_object_key: String,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Map::is_empty")]
    pub custom_object_fields: Map<String, Value>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub created_by_user_id: String,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub updated_by_user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "String::is_empty")]
    pub external_id: String,
}

impl Record {
    /// A new, unsaved record with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set a custom field value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.custom_object_fields.insert(name.into(), value.into());
        self
    }

    /// Set the caller-defined external identifier.
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Look up a custom field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.custom_object_fields.get(name)
    }

    /// Returns true once the server has assigned an id.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }

    /// Copy with every server-assigned attribute cleared.
    pub(crate) fn creation_payload(&self) -> Record {
        Record {
            name: self.name.clone(),
            custom_object_key: self.custom_object_key.clone(),
            custom_object_fields: self.custom_object_fields.clone(),
            external_id: self.external_id.clone(),
            ..Default::default()
        }
    }
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_deserialize_server_record() {
        let json = json!({
            "url": "https://acme.zendesk.com/api/v2/custom_objects/car/records/01GDXYD7ZTWYP542BA8MDDTE36.json",
            "name": "Tesla Model 3",
            "id": "01GDXYD7ZTWYP542BA8MDDTE36",
            "custom_object_key": "car",
            "custom_object_fields": {"color": "red", "year": 2022, "electric": true},
            "created_by_user_id": "10001",
            "updated_by_user_id": "10002",
            "created_at": "2022-09-26T16:24:39Z",
            "updated_at": "2022-09-27T08:00:00Z",
            "external_id": null
        });

        let record: Record = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "01GDXYD7ZTWYP542BA8MDDTE36");
        assert_eq!(record.custom_object_key, "car");
        assert_eq!(record.field("year"), Some(&json!(2022)));
        assert_eq!(record.field("electric"), Some(&json!(true)));
        assert_eq!(
            record.created_at,
            Some(Utc.with_ymd_and_hms(2022, 9, 26, 16, 24, 39).unwrap())
        );
        assert_eq!(record.external_id, "");
        assert!(record.is_persisted());
    }

    #[test]
    fn test_null_fields_map_decodes_empty() {
        let record: Record =
            serde_json::from_value(json!({"name": "x", "custom_object_fields": null})).unwrap();
        assert!(record.custom_object_fields.is_empty());
    }

    #[test]
    fn test_new_record_serializes_only_caller_fields() {
        let record = Record::new("Acme")
            .with_field("tier", "gold")
            .with_external_id("crm-42");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Acme",
                "custom_object_fields": {"tier": "gold"},
                "external_id": "crm-42"
            })
        );
        assert!(!record.is_persisted());
    }

    #[test]
    fn test_nested_field_values_are_opaque() {
        let nested = json!({"address": {"lines": ["1 Main St", null]}, "score": 4.5});
        let record = Record::new("x").with_field("profile", nested.clone());
        let back: Record = serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert_eq!(back.field("profile"), Some(&nested));
    }

    #[test]
    fn test_creation_payload_clears_server_fields() {
        let record = Record {
            id: "abc".into(),
            url: "https://x".into(),
            created_by_user_id: "1".into(),
            updated_by_user_id: "2".into(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            custom_object_key: "car".into(),
            external_id: "ext".into(),
            ..Record::new("Model S").with_field("color", "blue")
        };

        let payload = record.creation_payload();
        assert!(payload.id.is_empty());
        assert!(payload.url.is_empty());
        assert!(payload.created_by_user_id.is_empty());
        assert!(payload.updated_by_user_id.is_empty());
        assert!(payload.created_at.is_none());
        assert!(payload.updated_at.is_none());
        assert_eq!(payload.name, "Model S");
        assert_eq!(payload.custom_object_key, "car");
        assert_eq!(payload.external_id, "ext");
        assert_eq!(payload.field("color"), Some(&json!("blue")));
    }
}
