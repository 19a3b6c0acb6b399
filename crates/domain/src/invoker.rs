//! Invoker — the identity an event is attributed to.

use serde::{Deserialize, Serialize};

use crate::id::{RoleId, UserId};

/// The identity that caused an event, with the roles it held at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoker {
    pub id: UserId,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

impl Invoker {
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles.extend(roles);
        self
    }

    #[must_use]
    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }
}
