//! Error types and result types for store operations.
//!
//! The mock is deliberately permissive: missing records, empty filters, empty
//! stores and duplicate identifiers are handled with empty results or silent
//! no-ops, matching the lenient behavior of the driver it substitutes for.
//! The error type exists for the typed boundaries a dynamic caller never hits.

use bson::error::Error as BsonError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// Represents the errors the document store mock can surface.
///
/// Query, projection, insert and remove operations never fail; only update
/// documents with an unusable `$set` and serde interop can produce an error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Serialization/deserialization error when converting typed values to or
    /// from records (BSON, JSON).
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The update document passed to an update operation carries no `$set` key.
    #[error("update document is missing a $set operator")]
    MissingSetOperator,
    /// The `$set` value is not an embedded document and cannot replace a record.
    #[error("$set must hold a replacement document")]
    SetNotADocument,
}

/// A specialized `Result` type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<BsonError> for StoreError {
    fn from(err: BsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
