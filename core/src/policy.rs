/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Authorization decisions, kept free of any transport concerns.
//!
//! Every check takes the resolved [`Actor`] and the owner ids of the
//! resource in question and yields a [`Decision`]. The web layer maps
//! decisions onto its error type.

use super::types::MUser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    User { id: i32, is_staff: bool },
}

impl Actor {
    pub fn id(&self) -> Option<i32> {
        match self {
            Actor::Anonymous => None,
            Actor::User { id, .. } => Some(*id),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Actor::User { is_staff: true, .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::User { .. })
    }

    fn is(&self, user_id: i32) -> bool {
        self.id() == Some(user_id)
    }
}

impl From<&MUser> for Actor {
    fn from(user: &MUser) -> Self {
        Actor::User {
            id: user.id,
            is_staff: user.is_staff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Caller must sign in first.
    AuthenticationRequired,
    /// Caller is known but not permitted.
    Deny,
    /// The resource must look as if it does not exist.
    Hidden,
}

pub fn require_authenticated(actor: &Actor) -> Decision {
    if actor.is_authenticated() {
        Decision::Allow
    } else {
        Decision::AuthenticationRequired
    }
}

/// Private projects are visible to their owner only.
pub fn can_view_project(actor: &Actor, owner_id: i32, is_public: bool) -> Decision {
    if is_public || actor.is(owner_id) {
        Decision::Allow
    } else {
        Decision::Hidden
    }
}

pub fn can_modify_project(actor: &Actor, owner_id: i32) -> Decision {
    match actor {
        Actor::Anonymous => Decision::AuthenticationRequired,
        _ if actor.is(owner_id) || actor.is_staff() => Decision::Allow,
        _ => Decision::Deny,
    }
}

/// Resources follow the same rule as project modification.
pub fn can_manage_resources(actor: &Actor, owner_id: i32) -> Decision {
    can_modify_project(actor, owner_id)
}

pub fn can_delete_comment(actor: &Actor, author_id: i32, project_owner_id: i32) -> Decision {
    match actor {
        Actor::Anonymous => Decision::AuthenticationRequired,
        _ if actor.is(author_id) || actor.is(project_owner_id) || actor.is_staff() => {
            Decision::Allow
        }
        _ => Decision::Deny,
    }
}

pub fn can_administer(actor: &Actor) -> Decision {
    match actor {
        Actor::Anonymous => Decision::AuthenticationRequired,
        Actor::User { is_staff: true, .. } => Decision::Allow,
        Actor::User { .. } => Decision::Deny,
    }
}

/// Whether private entries of `owner_id`'s portfolio are included.
pub fn can_see_private_portfolio(actor: &Actor, owner_id: i32) -> bool {
    actor.is(owner_id)
}
