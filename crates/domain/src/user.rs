//! User — an account that can sign in and act on resources.

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::handle;
use crate::id::UserId;
use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userID")]
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub name: String,
    pub handle: String,
    pub suspended_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl User {
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants. `name` is only a display label and may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when the email is empty or the
    /// handle is set but malformed.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.email.is_empty() {
            return Err(ValidationError::EmptyEmail.into());
        }
        if !self.handle.is_empty() && !handle::is_valid(&self.handle) {
            return Err(ValidationError::InvalidHandle(self.handle.clone()).into());
        }
        Ok(())
    }

    #[must_use]
    pub fn is_suspended(&self) -> bool {
        self.suspended_at.is_some()
    }
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    username: Option<String>,
    name: Option<String>,
    handle: Option<String>,
    created_at: Option<Timestamp>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
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

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] if invariants fail.
    pub fn build(self) -> Result<User, HooklineError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            handle: self.handle.unwrap_or_default(),
            suspended_at: None,
            created_at: self.created_at.unwrap_or_else(crate::time::now),
            updated_at: None,
            deleted_at: None,
        };
        user.validate()?;
        Ok(user)
    }
}
