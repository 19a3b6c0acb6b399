//! Role events.

use crate::error::HooklineError;
use crate::event::ResourceEvent;
use crate::event::args::{self, Args, keys};
use crate::invoker::Invoker;
use crate::role::Role;

/// Resource variant for `system:role`.
#[derive(Debug, Clone)]
pub struct RoleEvent {
    role: Role,
    old_role: Option<Role>,
    invoker: Invoker,
}

impl RoleEvent {
    pub const RESOURCE_TYPE: &'static str = "system:role";

    #[must_use]
    pub fn new(role: Role, old_role: Option<Role>, invoker: Invoker) -> Self {
        Self {
            role,
            old_role,
            invoker,
        }
    }

    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    #[must_use]
    pub fn old_role(&self) -> Option<&Role> {
        self.old_role.as_ref()
    }

    #[must_use]
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    #[must_use]
    pub fn into_role(self) -> Role {
        self.role
    }
}

impl ResourceEvent for RoleEvent {
    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    fn has_previous(&self) -> bool {
        self.old_role.is_some()
    }

    fn encode(&self) -> Result<Args, HooklineError> {
        let mut out = Args::new();
        args::put(&mut out, keys::ROLE, &self.role)?;
        if let Some(old) = &self.old_role {
            args::put(&mut out, keys::OLD_ROLE, old)?;
        }
        args::put(&mut out, keys::INVOKER, &self.invoker)?;
        Ok(out)
    }

    fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        match args::sole_entry(results) {
            Some((key @ (keys::RESULT | keys::ROLE), raw)) => {
                args::merge_validated(&mut self.role, key, raw, Role::validate)?;
            }
            Some((key @ keys::INVOKER, raw)) => args::merge_into(&mut self.invoker, key, raw)?,
            _ => {}
        }
        Ok(())
    }
}
