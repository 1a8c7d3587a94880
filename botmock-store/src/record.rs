//! Schema-less records and serde interop.
//!
//! Records are open-ended mappings from field name to BSON value. Test code
//! usually builds them with the `doc!` macro, but production code frequently
//! stores typed structs; the helpers here convert typed values to and from
//! records (and JSON) so such code can drive the mock unmodified.

use bson::{Bson, Document, de::deserialize_from_bson, ser::serialize_to_bson};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, from_value, to_value};

use crate::error::{StoreError, StoreResult};

/// A schema-less stored record.
///
/// Exactly one field is reserved: `_id`, the record identifier, auto-assigned
/// at insertion time when absent (see [`Database::insert`]).
///
/// [`Database::insert`]: crate::store::Database::insert
pub type Record = Document;

/// Serializes a typed value into an untyped [`Record`].
///
/// # Errors
///
/// Returns an error if serialization fails or the value does not serialize
/// to a map (e.g. a bare scalar or sequence).
pub fn to_record<T: Serialize>(value: &T) -> StoreResult<Record> {
    match serialize_to_bson(value)? {
        Bson::Document(doc) => Ok(doc),
        other => Err(StoreError::Serialization(format!(
            "expected a document, got {other:?}"
        ))),
    }
}

/// Deserializes a typed value out of a [`Record`].
///
/// Fields the target type does not know (such as an assigned `_id`) are
/// ignored, per serde's defaults.
///
/// # Errors
///
/// Returns an error if deserialization fails or the structure is invalid.
pub fn from_record<T: DeserializeOwned>(record: Record) -> StoreResult<T> {
    Ok(deserialize_from_bson(Bson::Document(record))?)
}

/// Converts a typed value to a JSON value.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> StoreResult<Value> {
    Ok(to_value(value)?)
}

/// Creates a typed value from a JSON value.
///
/// # Errors
///
/// Returns an error if deserialization fails or the structure is invalid.
pub fn from_json<T: DeserializeOwned>(value: Value) -> StoreResult<T> {
    Ok(from_value(value)?)
}
