//! Events — a resource change wrapped in an [`Envelope`] that triggers can
//! match against, encode into script arguments, and decode results into.
//!
//! Each resource kind provides one [`ResourceEvent`] implementation holding
//! the current state, the previous state (update/delete events) and the
//! [`Invoker`](crate::invoker::Invoker). The dispatcher only ever talks to the
//! trait, so adding a kind never touches dispatch code.

pub mod args;
mod namespace;
mod record;
mod role;
mod user;

pub use args::Args;
pub use namespace::NamespaceEvent;
pub use record::RecordEvent;
pub use role::RoleEvent;
pub use user::UserEvent;

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::trigger::Constraint;

/// Lifecycle transition an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    BeforeCreate,
    AfterCreate,
    BeforeUpdate,
    AfterUpdate,
    BeforeDelete,
    AfterDelete,
    /// Explicitly requested by a user rather than caused by a mutation.
    OnManual,
}

impl EventKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BeforeCreate => "beforeCreate",
            Self::AfterCreate => "afterCreate",
            Self::BeforeUpdate => "beforeUpdate",
            Self::AfterUpdate => "afterUpdate",
            Self::BeforeDelete => "beforeDelete",
            Self::AfterDelete => "afterDelete",
            Self::OnManual => "onManual",
        }
    }

    /// Check that the presence of a previous state fits this kind.
    ///
    /// # Errors
    ///
    /// - create kinds with a previous state: [`ValidationError::UnexpectedPrevious`]
    /// - update/delete kinds without one: [`ValidationError::MissingPrevious`]
    pub fn check_previous(self, has_previous: bool) -> Result<(), ValidationError> {
        match self {
            Self::BeforeCreate | Self::AfterCreate if has_previous => {
                Err(ValidationError::UnexpectedPrevious { kind: self })
            }
            Self::BeforeUpdate | Self::AfterUpdate | Self::BeforeDelete | Self::AfterDelete
                if !has_previous =>
            {
                Err(ValidationError::MissingPrevious { kind: self })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities every resource variant exposes to the dispatcher.
///
/// `matches` and `encode` are read-only; `decode` is the only mutation and
/// takes `&mut self`, so it can never overlap with another call on the same
/// value.
pub trait ResourceEvent: Send + Sync {
    /// Resource type triggers bind to, e.g. `"compose:namespace"`.
    fn resource_type(&self) -> &'static str;

    /// Whether a previous state was captured.
    fn has_previous(&self) -> bool;

    /// Whether this resource satisfies the constraint `name` for `values`.
    ///
    /// Called once per trigger constraint; a trigger fires only when every
    /// call returns `true`. How several `values` combine is up to the
    /// implementation. The default matches everything, so a constraint a
    /// kind does not understand never vetoes a trigger.
    fn matches(&self, _name: &str, _op: &str, _values: &[String]) -> bool {
        true
    }

    /// Serialize the exposed fields into a fresh argument mapping.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Encode`] as soon as one field fails; no
    /// partial mapping is returned.
    fn encode(&self) -> Result<Args, HooklineError>;

    /// Merge a script's result mapping back into the resource.
    ///
    /// A recognized key is applied only when it is the sole entry of
    /// `results`; with zero or several entries nothing changes. Unknown keys
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Decode`] when the recognized value does not
    /// fit its target, or [`HooklineError::Validation`] when the merged
    /// resource breaks its invariants; the target is left as it was.
    fn decode(&mut self, results: &Args) -> Result<(), HooklineError>;
}

impl<T: ResourceEvent + ?Sized> ResourceEvent for Box<T> {
    fn resource_type(&self) -> &'static str {
        (**self).resource_type()
    }

    fn has_previous(&self) -> bool {
        (**self).has_previous()
    }

    fn matches(&self, name: &str, op: &str, values: &[String]) -> bool {
        (**self).matches(name, op, values)
    }

    fn encode(&self) -> Result<Args, HooklineError> {
        (**self).encode()
    }

    fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        (**self).decode(results)
    }
}

/// An event kind paired with the resource variant it describes.
#[derive(Debug, Clone)]
pub struct Envelope<R> {
    kind: EventKind,
    resource: R,
}

impl<R: ResourceEvent> Envelope<R> {
    /// Wrap `resource` for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when the resource's previous
    /// state does not fit `kind` (see [`EventKind::check_previous`]).
    pub fn new(kind: EventKind, resource: R) -> Result<Self, HooklineError> {
        kind.check_previous(resource.has_previous())?;
        Ok(Self { kind, resource })
    }

    #[must_use]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub fn resource_type(&self) -> &'static str {
        self.resource.resource_type()
    }

    #[must_use]
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Hand the (possibly script-modified) resource back to the caller.
    #[must_use]
    pub fn into_resource(self) -> R {
        self.resource
    }

    /// Evaluate one trigger constraint against the resource.
    #[must_use]
    pub fn matches(&self, constraint: &Constraint) -> bool {
        self.resource
            .matches(&constraint.name, &constraint.op, &constraint.values)
    }

    /// See [`ResourceEvent::encode`].
    ///
    /// # Errors
    ///
    /// Propagates the resource's [`HooklineError::Encode`].
    pub fn encode(&self) -> Result<Args, HooklineError> {
        self.resource.encode()
    }

    /// See [`ResourceEvent::decode`].
    ///
    /// # Errors
    ///
    /// Propagates the resource's [`HooklineError::Decode`] or
    /// [`HooklineError::Validation`].
    pub fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        self.resource.decode(results)
    }
}

impl<R: ResourceEvent + 'static> Envelope<R> {
    /// Erase the concrete resource type.
    #[must_use]
    pub fn boxed(self) -> Envelope<Box<dyn ResourceEvent>> {
        Envelope {
            kind: self.kind,
            resource: Box::new(self.resource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoker::Invoker;
    use crate::id::UserId;
    use crate::namespace::Namespace;

    fn namespace(name: &str) -> Namespace {
        Namespace::builder().name(name).build().unwrap()
    }

    fn invoker() -> Invoker {
        Invoker::new(UserId::new())
    }

    #[test]
    fn should_display_kind_in_camel_case() {
        assert_eq!(EventKind::BeforeCreate.to_string(), "beforeCreate");
        assert_eq!(EventKind::OnManual.to_string(), "onManual");
        let json = serde_json::to_string(&EventKind::AfterDelete).unwrap();
        assert_eq!(json, "\"afterDelete\"");
    }

    #[test]
    fn should_reject_previous_state_on_create() {
        let resource = NamespaceEvent::new(namespace("a"), Some(namespace("b")), invoker());
        let result = Envelope::new(EventKind::AfterCreate, resource);
        assert!(matches!(
            result,
            Err(HooklineError::Validation(ValidationError::UnexpectedPrevious {
                kind: EventKind::AfterCreate
            }))
        ));
    }

    #[test]
    fn should_require_previous_state_on_update_and_delete() {
        for kind in [
            EventKind::BeforeUpdate,
            EventKind::AfterUpdate,
            EventKind::BeforeDelete,
            EventKind::AfterDelete,
        ] {
            let resource = NamespaceEvent::new(namespace("a"), None, invoker());
            let result = Envelope::new(kind, resource);
            assert!(
                matches!(
                    result,
                    Err(HooklineError::Validation(ValidationError::MissingPrevious { .. }))
                ),
                "{kind} accepted a missing previous state"
            );
        }
    }

    #[test]
    fn should_accept_manual_event_with_or_without_previous_state() {
        let without = NamespaceEvent::new(namespace("a"), None, invoker());
        let with = NamespaceEvent::new(namespace("a"), Some(namespace("b")), invoker());
        assert!(Envelope::new(EventKind::OnManual, without).is_ok());
        assert!(Envelope::new(EventKind::OnManual, with).is_ok());
    }

    #[test]
    fn should_delegate_through_boxed_resource() {
        let resource = NamespaceEvent::new(namespace("a"), None, invoker());
        let envelope = Envelope::new(EventKind::AfterCreate, resource)
            .unwrap()
            .boxed();
        assert_eq!(envelope.kind(), EventKind::AfterCreate);
        assert_eq!(envelope.resource_type(), "compose:namespace");
        assert!(envelope.matches(&Constraint::new("anything", "eq", ["x"])));
        assert!(envelope.encode().unwrap().contains_key(args::keys::NAMESPACE));
    }
}
