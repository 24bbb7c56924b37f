//! Single-key JSON envelopes used on request and response bodies.
//!
//! A single resource travels as `{"<singular>": {...}}`; a collection as
//! `{"<plural>": [...], <pagination fields>}` with the pagination fields at
//! the same top level. Unknown top-level keys are ignored on decode.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, ErrorKind, Result};
use crate::page::PageCursor;
use crate::record::Record;

/// A resource with named envelope keys.
pub trait Resource: Serialize + DeserializeOwned {
    /// Key wrapping a single resource.
    const SINGULAR: &'static str;
    /// Key wrapping a collection of resources.
    const PLURAL: &'static str;
}

impl Resource for Record {
    const SINGULAR: &'static str = "custom_object_record";
    const PLURAL: &'static str = "custom_object_records";
}

/// Wrap one resource in its singular envelope.
pub fn encode<T: Resource>(resource: &T) -> Result<Bytes> {
    let value = serde_json::to_value(resource)
        .map_err(|e| Error::with_source(ErrorKind::Encoding(e.to_string()), e))?;

    let mut envelope = Map::with_capacity(1);
    envelope.insert(T::SINGULAR.to_string(), value);

    let body = serde_json::to_vec(&Value::Object(envelope))
        .map_err(|e| Error::with_source(ErrorKind::Encoding(e.to_string()), e))?;
    Ok(Bytes::from(body))
}

/// Unwrap one resource from its singular envelope.
pub fn decode<T: Resource>(body: &[u8]) -> Result<T> {
    let mut envelope = parse_object(body)?;
    let value = take_key(&mut envelope, T::SINGULAR)?;
    from_value(value, T::SINGULAR)
}

/// Unwrap a collection and its pagination fields.
///
/// An empty (or `null`) collection decodes to an empty vector.
pub fn decode_page<T: Resource>(body: &[u8]) -> Result<(Vec<T>, PageCursor)> {
    let mut envelope = parse_object(body)?;
    let items = match take_key(&mut envelope, T::PLURAL)? {
        Value::Null => Vec::new(),
        value => from_value(value, T::PLURAL)?,
    };
    let page = from_value(Value::Object(envelope), "pagination")?;
    Ok((items, page))
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::new(ErrorKind::Decode(format!(
            "expected a JSON object envelope, got {}",
            json_type(&other)
        )))),
        Err(e) => Err(Error::with_source(ErrorKind::Decode(e.to_string()), e)),
    }
}

fn take_key(envelope: &mut Map<String, Value>, key: &str) -> Result<Value> {
    envelope
        .remove(key)
        .ok_or_else(|| Error::new(ErrorKind::Decode(format!("missing envelope key `{key}`"))))
}

fn from_value<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        let message = format!("invalid `{what}`: {e}");
        Error::with_source(ErrorKind::Decode(message), e)
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
