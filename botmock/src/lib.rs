//! In-memory test doubles for a chat platform client and a document database
//! driver.
//!
//! This crate is the primary entry point for users of the botmock workspace.
//! It re-exports the two independent component families so chat-bot style
//! applications can be exercised in automated tests without a live network
//! connection or database process:
//!
//! - [`store`] - the document database mock: loose-equality filters, field
//!   projection, upsert semantics and predicate-based removal over a single
//!   inspectable in-memory record sequence
//! - [`chat`] - the chat platform mock: guilds, members, channels and
//!   messages as plain data containers preserving the client library's
//!   nested namespace call shapes
//!
//! Neither component depends on the other; both are consumed directly by
//! test code as substitutes for their real counterparts.
//!
//! # Quick Start
//!
//! ```ignore
//! use botmock::prelude::*;
//! use botmock::bson::doc;
//!
//! // Document store: insert, filter, project, consume.
//! let mut db = Database::new();
//! db.collection("reminders").insert(doc! { "name": "standup" }).await?;
//! db.collection("reminders")
//!     .find(doc! { "name": "standup" })
//!     .to_array(|result| assert_eq!(result.unwrap().len(), 1));
//!
//! // Chat platform: guild, member, message, reply.
//! let guild = Guild::new();
//! let author = Member::with_id(&guild, 1234);
//! let mut message = Message::new(author, "ping", vec![], Channel::new(false), guild);
//! message.reply("Hello!");
//! assert_eq!(message.reply_status(), Some("<@1234>, Hello!"));
//! ```

pub mod prelude;

// Re-export BSON types for convenience
pub use bson;

/// Document database mock.
pub mod store {
    pub use botmock_store::{
        Database, FindOptions, InsertResult, Record, StoreError, StoreResult,
        record::{from_json, from_record, to_json, to_record},
    };
}

/// Chat platform mock.
pub mod chat {
    pub use botmock_chat::{
        Attachment, Attachments, Author, Channel, FetchedMember, Guild, Id, Member,
        MemberManager, MemberRoleList, Message, Role, RoleCache, RoleManager,
    };
}
