//! In-memory document database mock for exercising bot code in tests.
//!
//! This crate provides a lightweight stand-in for a document database driver:
//! the same call shapes (chained `collection`/`find`/`project`/`to_array`
//! reads, awaitable `insert`/`insert_one`/`update_one`/`remove` writes) over
//! a single inspectable in-memory record sequence, with no network, process
//! or persistence behind it.
//!
//! The matching semantics deliberately mirror the permissive driver they
//! substitute for: flat loose-equality filters, exclusion-only projections,
//! whole-document replacement on update, and silent no-ops instead of errors
//! for missing records and empty filters. See [`store::Database`] for the
//! full contract.
//!
//! # Quick Start
//!
//! ```ignore
//! use botmock_store::Database;
//! use bson::doc;
//!
//! let mut db = Database::new();
//!
//! db.collection("reminders").insert(doc! { "name": "blah" }).await?;
//!
//! db.collection("reminders")
//!     .find(doc! { "name": "blah" })
//!     .to_array(|result| {
//!         let records = result.unwrap();
//!         assert_eq!(records.len(), 1);
//!     });
//! ```

pub mod error;
pub mod record;
pub mod store;

mod matcher;

pub use error::{StoreError, StoreResult};
pub use record::Record;
pub use store::{Database, FindOptions, InsertResult};
