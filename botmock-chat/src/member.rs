//! Guild members and their role-id lists.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    guild::{Guild, MemberManager, Role, RoleCache, RoleManager},
    id::{self, Id},
};

/// In-memory stand-in for a guild member.
///
/// A member belongs to exactly one guild and is registered into that guild's
/// member collection as a side effect of construction. The member keeps only
/// a weak back-reference to the guild, never a second owner, so dropping
/// the guild drops its members regardless of surviving member handles.
///
/// Members are cloneable handles: the copy registered in the guild and the
/// one held by the caller share the same role list.
#[derive(Debug, Clone)]
pub struct Member {
    /// Member identifier, caller-supplied or randomly generated.
    pub id: Id,
    /// Mirrors the id's display form, a quirk of the mocked platform kept
    /// as-is.
    pub username: String,
    /// The member's role-id list (`member.roles`).
    pub roles: MemberRoleList,
    guild_roles: Weak<RefCell<Vec<Role>>>,
    guild_members: Weak<RefCell<Vec<Member>>>,
}

impl Member {
    /// Creates a member with a random id in `100..=100_099` and registers it
    /// with `guild`.
    pub fn new(guild: &Guild) -> Self {
        Self::with_id(guild, id::random_member_id())
    }

    /// Creates a member with the supplied id and registers it with `guild`.
    pub fn with_id(guild: &Guild, id: impl Into<Id>) -> Self {
        let id = id.into();
        let member = Self {
            username: id.to_string(),
            id,
            roles: MemberRoleList::default(),
            guild_roles: guild.roles.cache.downgrade(),
            guild_members: guild.members.downgrade(),
        };

        guild.members.add(member.clone());
        member
    }

    /// Upgrades the back-reference to the owning guild.
    ///
    /// Returns `None` once the guild has been dropped; the member never keeps
    /// the guild alive.
    pub fn guild(&self) -> Option<Guild> {
        let roles = self.guild_roles.upgrade()?;
        let members = self.guild_members.upgrade()?;

        Some(Guild {
            roles: RoleManager {
                cache: RoleCache::from_shared(roles),
            },
            members: MemberManager::from_shared(members),
        })
    }
}

/// Ordered list of role ids attached to a member (`member.roles`).
///
/// Cloneable handle; the copies on a member and on its guild-registered twin
/// alias the same list.
#[derive(Debug, Clone, Default)]
pub struct MemberRoleList {
    ids: Rc<RefCell<Vec<Id>>>,
}

impl MemberRoleList {
    /// Appends a role id. Duplicates are permitted.
    pub fn add(&self, id: impl Into<Id>) {
        self.ids.borrow_mut().push(id.into());
    }

    /// Removes the first occurrence of `id`, by loose-equality match.
    ///
    /// Removing an id that is not present is a silent no-op: no error, no
    /// mutation.
    pub fn remove(&self, id: impl Into<Id>) {
        let id = id.into();
        let mut ids = self.ids.borrow_mut();

        if let Some(index) = ids.iter().position(|existing| *existing == id) {
            ids.remove(index);
        }
    }

    /// Whether the list holds an id loosely equal to `id`.
    pub fn contains(&self, id: impl Into<Id>) -> bool {
        let id = id.into();
        self.ids.borrow().iter().any(|existing| *existing == id)
    }

    /// Snapshot of the role ids, in insertion order.
    pub fn ids(&self) -> Vec<Id> {
        self.ids.borrow().clone()
    }

    /// Number of role ids, duplicates included.
    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.borrow().is_empty()
    }
}
