//! The mock document database.
//!
//! This module provides [`Database`], an in-memory stand-in for a document
//! database connection. It preserves the call shape of the driver it
//! substitutes for, with chained `collection`/`find`/`project`/`to_array`
//! reads and awaitable `insert`/`update_one`/`remove` writes, while keeping
//! all state in a plain, inspectable vector of records.

use bson::{Bson, Document};
use rand::Rng;

use crate::{
    error::{StoreError, StoreResult},
    matcher,
    record::Record,
};

/// Options accepted by [`Database::find_with`].
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Projection applied to the result immediately after matching.
    pub projection: Option<Document>,
}

/// Resolve shape of the insert operations.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertResult {
    /// The `_id` of the inserted record, caller-supplied or assigned.
    pub inserted_id: Bson,
}

/// In-memory stand-in for a document database connection.
///
/// All collections share one underlying record sequence; the collection name
/// is recorded purely so chained call sites keep working. Records are kept in
/// insertion order, queries scan them linearly, and a query result is a deep
/// copy consumed exactly once by [`to_array`](Database::to_array).
///
/// The write operations are `async` only for call-shape compatibility with a
/// real asynchronous driver: they resolve within the same poll and never
/// suspend. The store itself is single-threaded by design: each test case is
/// expected to construct a fresh instance.
///
/// # Example
///
/// ```ignore
/// use botmock_store::Database;
/// use bson::doc;
///
/// let mut db = Database::new();
/// db.collection("reminders").insert(doc! { "name": "blah" }).await?;
///
/// db.collection("reminders")
///     .find(doc! { "name": "blah" })
///     .to_array(|result| {
///         assert_eq!(result.unwrap().len(), 1);
///     });
/// ```
#[derive(Debug, Clone, Default)]
pub struct Database {
    /// Stored records, in insertion order.
    records: Vec<Record>,
    /// Name recorded by the last `collection` call. Bookkeeping only.
    active_collection: String,
    /// Deep copy of the last `find` matches, pending consumption.
    last_result: Vec<Record>,
}

impl Database {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the active collection for subsequent calls.
    ///
    /// Pure bookkeeping: every collection shares the same record sequence,
    /// so this only records the name and returns the store for chaining.
    pub fn collection(&mut self, name: impl Into<String>) -> &mut Self {
        self.active_collection = name.into();
        self
    }

    /// Evaluates `query` as a conjunction of loose-equality field comparisons
    /// and snapshots the matches, preserving insertion order.
    ///
    /// An empty query matches every record; an empty store produces an empty
    /// result rather than an error. The snapshot is a deep copy, so later
    /// writes do not change it, and it stays pending until consumed by
    /// [`to_array`](Database::to_array).
    pub fn find(&mut self, query: Document) -> &mut Self {
        self.find_with(query, FindOptions::default())
    }

    /// Like [`find`](Database::find), but applies `options.projection` to the
    /// snapshot immediately when present.
    pub fn find_with(&mut self, query: Document, options: FindOptions) -> &mut Self {
        self.last_result = self
            .records
            .iter()
            .filter(|record| matcher::matches(record, &query))
            .cloned()
            .collect();

        if let Some(projection) = options.projection {
            self.project(projection);
        }

        self
    }

    /// Applies a projection to the pending query result, in place.
    ///
    /// Every projection field mapped to a falsy value (numeric zero, `false`,
    /// `Null`, empty string) is removed from each record in the result.
    /// Truthy values are a no-op: only exclusion is implemented, and the
    /// asymmetry is kept deliberately for compatibility testing.
    pub fn project(&mut self, projection: Document) -> &mut Self {
        for (field, flag) in projection.iter() {
            if matcher::is_falsy(flag) {
                for record in &mut self.last_result {
                    record.remove(field.as_str());
                }
            }
        }

        self
    }

    /// Consumes the pending query result.
    ///
    /// Invokes `callback` synchronously with `Ok(result)` and leaves the
    /// pending result empty. This is the sole consumption point: a second
    /// call without an intervening [`find`](Database::find) sees an empty
    /// result.
    pub fn to_array<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(StoreResult<Vec<Record>>),
    {
        callback(Ok(std::mem::take(&mut self.last_result)));
        self
    }

    /// Peeks at the pending query result without consuming it.
    ///
    /// Invokes `callback` synchronously with a view of the pending result,
    /// which stays in place for a later [`to_array`](Database::to_array).
    /// A small testing helper carried for call-shape compatibility.
    pub fn then<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnOnce(&[Record]),
    {
        callback(&self.last_result);
        self
    }

    /// Appends a record, assigning a random integer `_id` in
    /// `1000..=100_999` when the record carries none (or carries `Null`).
    ///
    /// Identifier uniqueness is not enforced; a caller-supplied `_id` is
    /// accepted as-is, duplicates included.
    ///
    /// # Errors
    ///
    /// Never fails under normal conditions; the `Result` mirrors the
    /// asynchronous driver contract.
    pub async fn insert(&mut self, mut record: Record) -> StoreResult<InsertResult> {
        let inserted_id = ensure_id(&mut record);
        self.records.push(record);

        Ok(InsertResult { inserted_id })
    }

    /// Alias of [`insert`](Database::insert); identical contract.
    pub async fn insert_one(&mut self, record: Record) -> StoreResult<InsertResult> {
        self.insert(record).await
    }

    /// Replaces or inserts a record, keyed by `filter`'s `_id`.
    ///
    /// Locates the first stored record whose `_id` loosely equals
    /// `filter["_id"]`. On a hit the record is replaced *wholly* with the
    /// update's `$set` document, a deliberate simplification from real
    /// partial-update semantics, so fields absent from `$set` vanish. On a
    /// miss (including a filter without `_id`) the `$set` document is
    /// inserted instead, with the usual id assignment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingSetOperator`] when `update` has no `$set`
    /// key, and [`StoreError::SetNotADocument`] when `$set` is not an
    /// embedded document.
    pub async fn update_one(
        &mut self,
        filter: Document,
        update: Document,
    ) -> StoreResult<&mut Self> {
        self.apply_update(filter, update)?;
        Ok(self)
    }

    /// Like [`update_one`](Database::update_one), but invokes `callback` with
    /// the replacement document before resolving.
    ///
    /// On the replace path the callback receives the `$set` document
    /// verbatim; on the upsert path it carries the assigned `_id`.
    pub async fn update_one_with<F>(
        &mut self,
        filter: Document,
        update: Document,
        callback: F,
    ) -> StoreResult<&mut Self>
    where
        F: FnOnce(StoreResult<Record>),
    {
        let replacement = self.apply_update(filter, update)?;
        callback(Ok(replacement));

        Ok(self)
    }

    /// Deletes every record matching the full conjunction in `query`.
    ///
    /// An empty query performs no removal: "match nothing to delete" is kept
    /// distinct from "match everything", so a careless `remove(doc! {})`
    /// never wipes the store.
    pub async fn remove(&mut self, query: Document) -> StoreResult<&mut Self> {
        if !query.is_empty() {
            self.records.retain(|record| !matcher::matches(record, &query));
        }

        Ok(self)
    }

    /// Number of stored records, across all collection names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Name recorded by the last [`collection`](Database::collection) call.
    pub fn active_collection(&self) -> &str {
        &self.active_collection
    }

    fn apply_update(&mut self, filter: Document, update: Document) -> StoreResult<Record> {
        let set = match update.get("$set") {
            None => return Err(StoreError::MissingSetOperator),
            Some(Bson::Document(doc)) => doc.clone(),
            Some(_) => return Err(StoreError::SetNotADocument),
        };

        let position = filter.get("_id").and_then(|id| {
            self.records.iter().position(|record| {
                record
                    .get("_id")
                    .is_some_and(|stored| matcher::loose_eq(stored, id))
            })
        });

        match position {
            Some(index) => {
                self.records[index] = set.clone();
                Ok(set)
            }
            None => {
                let mut inserted = set;
                ensure_id(&mut inserted);
                self.records.push(inserted.clone());

                Ok(inserted)
            }
        }
    }
}

/// Assigns a random `_id` when the record carries none (or carries `Null`),
/// returning the effective identifier either way.
fn ensure_id(record: &mut Record) -> Bson {
    match record.get("_id") {
        Some(id) if !matches!(id, Bson::Null) => id.clone(),
        _ => {
            let id = Bson::Int64(random_record_id());
            record.insert("_id", id.clone());
            id
        }
    }
}

/// Random record identifier in `1000..=100_999`, the documented range.
fn random_record_id() -> i64 {
    rand::thread_rng().gen_range(1_000..=100_999)
}
