//! Convenient re-exports of commonly used types from botmock.
//!
//! Import this prelude module to quickly access the most frequently used
//! types without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use botmock::prelude::*;
//! ```

pub use botmock_store::{
    Database, FindOptions, InsertResult, Record, StoreError, StoreResult,
};

pub use botmock_chat::{
    Attachment, Author, Channel, FetchedMember, Guild, Id, Member, Message,
};
