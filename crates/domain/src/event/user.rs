//! User events.

use crate::error::HooklineError;
use crate::event::ResourceEvent;
use crate::event::args::{self, Args, keys};
use crate::invoker::Invoker;
use crate::user::User;

/// Resource variant for `system:user`.
#[derive(Debug, Clone)]
pub struct UserEvent {
    user: User,
    old_user: Option<User>,
    invoker: Invoker,
}

impl UserEvent {
    pub const RESOURCE_TYPE: &'static str = "system:user";

    #[must_use]
    pub fn new(user: User, old_user: Option<User>, invoker: Invoker) -> Self {
        Self {
            user,
            old_user,
            invoker,
        }
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn old_user(&self) -> Option<&User> {
        self.old_user.as_ref()
    }

    #[must_use]
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    #[must_use]
    pub fn into_user(self) -> User {
        self.user
    }
}

impl ResourceEvent for UserEvent {
    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    fn has_previous(&self) -> bool {
        self.old_user.is_some()
    }

    fn encode(&self) -> Result<Args, HooklineError> {
        let mut out = Args::new();
        args::put(&mut out, keys::USER, &self.user)?;
        if let Some(old) = &self.old_user {
            args::put(&mut out, keys::OLD_USER, old)?;
        }
        args::put(&mut out, keys::INVOKER, &self.invoker)?;
        Ok(out)
    }

    fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        match args::sole_entry(results) {
            Some((key @ (keys::RESULT | keys::USER), raw)) => {
                args::merge_validated(&mut self.user, key, raw, User::validate)?;
            }
            Some((key @ keys::INVOKER, raw)) => args::merge_into(&mut self.invoker, key, raw)?,
            _ => {}
        }
        Ok(())
    }
}
