//! In-memory chat platform mock for exercising bot code in tests.
//!
//! This crate provides plain-data stand-ins for the guild, member, channel
//! and message types of a chat client library, preserving the library's
//! nested namespace call shapes (`guild.roles.cache.add`,
//! `guild.members.fetch`, `member.roles.remove`) so production code runs
//! unmodified against the mock.
//!
//! Everything lives in memory for the duration of a test case; nothing is
//! sent, persisted or destroyed programmatically. Lookups that would fail on
//! a real platform return permissive shapes instead of errors; see
//! [`guild::MemberManager::fetch`] and [`message::Message::reply`] for the
//! preserved quirks.
//!
//! # Quick Start
//!
//! ```ignore
//! use botmock_chat::{Channel, Guild, Member, Message};
//!
//! let guild = Guild::new();
//! guild.roles.cache.add("Moderator");
//!
//! let author = Member::with_id(&guild, 1234);
//! let channel = Channel::new(false);
//!
//! let mut message = Message::new(author, "!remind me", vec![], channel, guild);
//! message.reply("Hello!");
//! assert_eq!(message.reply_status(), Some("<@1234>, Hello!"));
//! ```

pub mod channel;
pub mod guild;
pub mod id;
pub mod member;
pub mod message;

pub use channel::Channel;
pub use guild::{FetchedMember, Guild, MemberManager, Role, RoleCache, RoleManager};
pub use id::Id;
pub use member::{Member, MemberRoleList};
pub use message::{Attachment, Attachments, Author, Message};
