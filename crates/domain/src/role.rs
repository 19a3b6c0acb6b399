//! Role — a named group of users that permissions are granted to.

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::handle;
use crate::id::RoleId;
use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "roleID")]
    pub id: RoleId,
    pub name: String,
    pub handle: String,
    pub archived_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl Role {
    #[must_use]
    pub fn builder() -> RoleBuilder {
        RoleBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when the name is empty or the
    /// handle is set but malformed.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.handle.is_empty() && !handle::is_valid(&self.handle) {
            return Err(ValidationError::InvalidHandle(self.handle.clone()).into());
        }
        Ok(())
    }

    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}

#[derive(Debug, Default)]
pub struct RoleBuilder {
    id: Option<RoleId>,
    name: Option<String>,
    handle: Option<String>,
    created_at: Option<Timestamp>,
}

impl RoleBuilder {
    #[must_use]
    pub fn id(mut self, id: RoleId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Role`].
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] if invariants fail.
    pub fn build(self) -> Result<Role, HooklineError> {
        let role = Role {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            handle: self.handle.unwrap_or_default(),
            archived_at: None,
            created_at: self.created_at.unwrap_or_else(crate::time::now),
            updated_at: None,
            deleted_at: None,
        };
        role.validate()?;
        Ok(role)
    }
}
