//! Message snapshots and the reply side effect.

use crate::{channel::Channel, guild::Guild, id::Id, member::Member};

/// The author slot of a [`Message`].
///
/// Production code hands a member here; sloppier call sites pass a bare
/// string. The mock accepts both, and a raw author carries no id, so it
/// produces the literal text `undefined` in reply mentions. That is a
/// documented quirk of the mocked library, preserved rather than corrected.
#[derive(Debug, Clone)]
pub enum Author {
    /// A proper guild member.
    Member(Member),
    /// A bare string standing in for an author.
    Raw(String),
}

impl Author {
    /// The author's id, if the author actually carries one.
    pub fn id(&self) -> Option<&Id> {
        match self {
            Author::Member(member) => Some(&member.id),
            Author::Raw(_) => None,
        }
    }
}

impl From<Member> for Author {
    fn from(member: Member) -> Self {
        Author::Member(member)
    }
}

impl From<&str> for Author {
    fn from(value: &str) -> Self {
        Author::Raw(value.to_string())
    }
}

impl From<String> for Author {
    fn from(value: String) -> Self {
        Author::Raw(value)
    }
}

/// A single message attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    /// Attachment location.
    pub url: String,
}

impl Attachment {
    /// Creates an attachment pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Attachment summary carried by a message: count plus the list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    /// Number of attachments.
    pub size: usize,
    /// The attachments, in the order supplied.
    pub attachments: Vec<Attachment>,
}

impl From<Vec<Attachment>> for Attachments {
    fn from(attachments: Vec<Attachment>) -> Self {
        Self {
            size: attachments.len(),
            attachments,
        }
    }
}

/// Immutable message snapshot.
///
/// Combines an author, text content, an attachment summary, a channel and a
/// guild. Nothing changes after construction except `reply_status`, which is
/// set only by [`reply`](Message::reply); the mock records the reply instead
/// of sending anything.
///
/// # Example
///
/// ```ignore
/// use botmock_chat::{Channel, Guild, Member, Message};
///
/// let guild = Guild::new();
/// let author = Member::with_id(&guild, 1234);
/// let channel = Channel::new(false);
///
/// let mut message = Message::new(author, "ping", vec![], channel, guild.clone());
/// message.reply("Hello!");
///
/// assert_eq!(message.reply_status(), Some("<@1234>, Hello!"));
/// ```
#[derive(Debug, Clone)]
pub struct Message {
    author: Author,
    content: String,
    attachments: Attachments,
    channel: Channel,
    guild: Guild,
    reply_status: Option<String>,
}

impl Message {
    /// Creates a message snapshot.
    pub fn new(
        author: impl Into<Author>,
        content: impl Into<String>,
        attachments: Vec<Attachment>,
        channel: Channel,
        guild: Guild,
    ) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            attachments: Attachments::from(attachments),
            channel,
            guild,
            reply_status: None,
        }
    }

    /// The author of this message.
    pub fn author(&self) -> &Author {
        &self.author
    }

    /// The text contents of this message.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The attachment summary of this message.
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    /// The channel this message was sent in.
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// The guild this message belongs to.
    pub fn guild(&self) -> &Guild {
        &self.guild
    }

    /// The recorded reply, if [`reply`](Message::reply) has been called.
    pub fn reply_status(&self) -> Option<&str> {
        self.reply_status.as_deref()
    }

    /// Records a reply as a mention string: `<@{author id}>, {text}`.
    ///
    /// An author without an id (see [`Author::Raw`]) yields the literal
    /// `undefined` in the mention slot.
    pub fn reply(&mut self, text: &str) {
        let mention = match self.author.id() {
            Some(id) => id.to_string(),
            None => "undefined".to_string(),
        };

        self.reply_status = Some(format!("<@{mention}>, {text}"));
    }
}
