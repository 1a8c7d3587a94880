//! Guild mock with its role and member collections.
//!
//! The nested field paths (`guild.roles.cache`, `guild.members`) reproduce
//! the namespace shapes of the client library being substituted, so call
//! sites written against the real library run unmodified against the mock.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    id::Id,
    member::{Member, MemberRoleList},
};

/// A named guild role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Role name. Uniqueness is not enforced.
    pub name: String,
}

/// In-memory stand-in for a chat platform guild.
///
/// A guild owns an ordered role list and an ordered member list, exposed
/// through the `roles.cache` and `members` namespaces. The guild is a
/// cloneable handle: clones alias the same underlying lists, which is how
/// members and messages keep working references to their guild without a
/// second owner.
///
/// Single-threaded by design: the intended caller is test code driving one
/// guild per case.
///
/// # Example
///
/// ```ignore
/// use botmock_chat::{Guild, Member};
///
/// let guild = Guild::new();
/// guild.roles.cache.add("Moderator");
///
/// let member = Member::with_id(&guild, "My Test ID");
/// assert_eq!(guild.members.fetch("My Test ID").id, Some(member.id));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Guild {
    /// Role namespace (`guild.roles.cache`).
    pub roles: RoleManager,
    /// Member collection (`guild.members`).
    pub members: MemberManager,
}

impl Guild {
    /// Creates an empty guild.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Role namespace of a guild; holds only the cache.
#[derive(Debug, Clone, Default)]
pub struct RoleManager {
    /// The cached role list (`guild.roles.cache`).
    pub cache: RoleCache,
}

/// Ordered, append-only role list with linear lookup.
#[derive(Debug, Clone, Default)]
pub struct RoleCache {
    roles: Rc<RefCell<Vec<Role>>>,
}

impl RoleCache {
    /// Appends a role with the given name.
    ///
    /// No uniqueness check: adding the same name twice yields two entries.
    pub fn add(&self, name: impl Into<String>) {
        self.roles.borrow_mut().push(Role { name: name.into() });
    }

    /// Returns the first role matching `predicate`, or `None`.
    pub fn find<P>(&self, predicate: P) -> Option<Role>
    where
        P: Fn(&Role) -> bool,
    {
        self.roles.borrow().iter().find(|role| predicate(role)).cloned()
    }

    /// Snapshot of the role list, in insertion order.
    pub fn roles(&self) -> Vec<Role> {
        self.roles.borrow().clone()
    }

    /// Number of roles, duplicates included.
    pub fn len(&self) -> usize {
        self.roles.borrow().len()
    }

    /// Whether no roles have been added.
    pub fn is_empty(&self) -> bool {
        self.roles.borrow().is_empty()
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<Vec<Role>>> {
        Rc::downgrade(&self.roles)
    }

    pub(crate) fn from_shared(roles: Rc<RefCell<Vec<Role>>>) -> Self {
        Self { roles }
    }
}

/// Ordered, append-only member collection with linear lookup by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemberManager {
    members: Rc<RefCell<Vec<Member>>>,
}

impl MemberManager {
    /// Appends a member handle.
    ///
    /// [`Member`] construction calls this automatically; direct use is for
    /// tests assembling members by hand.
    pub fn add(&self, member: Member) {
        self.members.borrow_mut().push(member);
    }

    /// Looks up a member by loose-equality identifier match.
    ///
    /// On a hit, every field of the returned shape is populated and `user`
    /// duplicates the member handle, mimicking the wrapper object the real
    /// platform returns. On a miss the fields are all `None` instead of the
    /// call failing, so `.id` and `.user` stay safely dereferencable.
    pub fn fetch(&self, id: impl Into<Id>) -> FetchedMember {
        let id = id.into();

        match self.members.borrow().iter().find(|member| member.id == id) {
            Some(member) => FetchedMember {
                id: Some(member.id.clone()),
                username: Some(member.username.clone()),
                roles: Some(member.roles.clone()),
                user: Some(member.clone()),
            },
            None => FetchedMember::default(),
        }
    }

    /// Snapshot of the member list, in insertion order.
    pub fn members(&self) -> Vec<Member> {
        self.members.borrow().clone()
    }

    /// Number of members in the collection.
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    /// Whether the collection holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    pub(crate) fn downgrade(&self) -> Weak<RefCell<Vec<Member>>> {
        Rc::downgrade(&self.members)
    }

    pub(crate) fn from_shared(members: Rc<RefCell<Vec<Member>>>) -> Self {
        Self { members }
    }
}

/// Shape returned by [`MemberManager::fetch`].
///
/// A miss yields the default value (all fields `None`) rather than an
/// error or an absent value; this mirrors the permissive lookup shape of the
/// client library being substituted and is preserved deliberately.
#[derive(Debug, Clone, Default)]
pub struct FetchedMember {
    /// The member's identifier.
    pub id: Option<Id>,
    /// The member's username.
    pub username: Option<String>,
    /// The member's role-id list.
    pub roles: Option<MemberRoleList>,
    /// Wrapper duplicate of the member handle.
    pub user: Option<Member>,
}
