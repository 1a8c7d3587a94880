//! Channel mock.

use crate::id::{self, Id};

/// In-memory stand-in for a text channel.
///
/// A channel is an identifier plus an NSFW flag, immutable after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    id: Id,
    nsfw: bool,
}

impl Channel {
    /// Creates a channel with a random id in `0..=9_999`.
    pub fn new(nsfw: bool) -> Self {
        Self {
            id: id::random_channel_id(),
            nsfw,
        }
    }

    /// Creates a channel with a caller-supplied id.
    pub fn with_id(id: impl Into<Id>, nsfw: bool) -> Self {
        Self {
            id: id.into(),
            nsfw,
        }
    }

    /// The channel identifier.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Whether this channel is flagged NSFW.
    pub fn nsfw(&self) -> bool {
        self.nsfw
    }
}
