//! Trigger — a rule binding resource events to an automation script.
//!
//! A trigger names the resource type and event kinds it listens to, a list
//! of [`Constraint`]s that must all hold, and the script to run when it fires.

mod constraint;

pub use constraint::{Constraint, Operator, UnknownOperator};

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::event::EventKind;
use crate::id::TriggerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: TriggerId,
    pub name: String,
    pub enabled: bool,
    /// Resource type this trigger listens to, e.g. `"compose:record"`.
    pub resource_type: String,
    /// Event kinds this trigger listens to; empty means all of them.
    #[serde(default)]
    pub event_kinds: Vec<EventKind>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Name of the script handed to the script runner.
    pub script: String,
}

impl Trigger {
    /// Create a builder for constructing a [`Trigger`].
    #[must_use]
    pub fn builder() -> TriggerBuilder {
        TriggerBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `resource_type` is empty ([`ValidationError::EmptyResourceType`])
    /// - `script` is empty ([`ValidationError::EmptyScript`])
    /// - a constraint has no values or an unknown operator
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.resource_type.is_empty() {
            return Err(ValidationError::EmptyResourceType.into());
        }
        if self.script.is_empty() {
            return Err(ValidationError::EmptyScript.into());
        }
        for constraint in &self.constraints {
            constraint.validate()?;
        }
        Ok(())
    }

    /// Whether this trigger listens to `kind` events on `resource_type`.
    ///
    /// Disabled triggers listen to nothing. Constraints are not consulted.
    #[must_use]
    pub fn handles(&self, resource_type: &str, kind: EventKind) -> bool {
        self.enabled
            && self.resource_type == resource_type
            && (self.event_kinds.is_empty() || self.event_kinds.contains(&kind))
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({} → {})", self.name, self.resource_type, self.script)
    }
}

/// Step-by-step builder for [`Trigger`].
#[derive(Debug, Default)]
pub struct TriggerBuilder {
    id: Option<TriggerId>,
    name: Option<String>,
    enabled: Option<bool>,
    resource_type: Option<String>,
    event_kinds: Vec<EventKind>,
    constraints: Vec<Constraint>,
    script: Option<String>,
}

impl TriggerBuilder {
    #[must_use]
    pub fn id(mut self, id: TriggerId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    #[must_use]
    pub fn on(mut self, kind: EventKind) -> Self {
        self.event_kinds.push(kind);
        self
    }

    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    #[must_use]
    pub fn script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    /// Consume the builder, validate, and return a [`Trigger`].
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] if required fields are missing
    /// or a constraint is malformed.
    pub fn build(self) -> Result<Trigger, HooklineError> {
        let trigger = Trigger {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            resource_type: self.resource_type.unwrap_or_default(),
            event_kinds: self.event_kinds,
            constraints: self.constraints,
            script: self.script.unwrap_or_default(),
        };
        trigger.validate()?;
        Ok(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_builder() -> TriggerBuilder {
        Trigger::builder()
            .name("Confirm rename")
            .resource_type("compose:namespace")
            .on(EventKind::BeforeUpdate)
            .script("/scripts/confirm-rename.js")
    }

    #[test]
    fn should_build_enabled_trigger_when_required_fields_provided() {
        let trigger = valid_builder().build().unwrap();
        assert!(trigger.enabled);
        assert_eq!(trigger.event_kinds, vec![EventKind::BeforeUpdate]);
        assert!(trigger.constraints.is_empty());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Trigger::builder()
            .resource_type("system:role")
            .script("x")
            .build();
        assert!(matches!(
            result,
            Err(HooklineError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_script_is_empty() {
        let result = Trigger::builder()
            .name("No script")
            .resource_type("system:role")
            .build();
        assert!(matches!(
            result,
            Err(HooklineError::Validation(ValidationError::EmptyScript))
        ));
    }

    #[test]
    fn should_return_validation_error_when_resource_type_is_empty() {
        let result = Trigger::builder().name("Anywhere").script("x").build();
        assert!(matches!(
            result,
            Err(HooklineError::Validation(ValidationError::EmptyResourceType))
        ));
    }

    #[test]
    fn should_reject_malformed_constraint() {
        let result = valid_builder()
            .constraint(Constraint::new("namespace", "eq", Vec::<String>::new()))
            .build();
        assert!(matches!(
            result,
            Err(HooklineError::Validation(
                ValidationError::EmptyConstraintValues { .. }
            ))
        ));
    }

    #[test]
    fn should_handle_listed_kind_on_same_resource_type() {
        let trigger = valid_builder().build().unwrap();
        assert!(trigger.handles("compose:namespace", EventKind::BeforeUpdate));
        assert!(!trigger.handles("compose:namespace", EventKind::AfterUpdate));
        assert!(!trigger.handles("compose:record", EventKind::BeforeUpdate));
    }

    #[test]
    fn should_handle_every_kind_when_none_listed() {
        let trigger = Trigger::builder()
            .name("All namespace events")
            .resource_type("compose:namespace")
            .script("audit")
            .build()
            .unwrap();
        assert!(trigger.handles("compose:namespace", EventKind::AfterDelete));
        assert!(trigger.handles("compose:namespace", EventKind::OnManual));
    }

    #[test]
    fn should_not_handle_anything_when_disabled() {
        let trigger = valid_builder().enabled(false).build().unwrap();
        assert!(!trigger.handles("compose:namespace", EventKind::BeforeUpdate));
    }

    #[test]
    fn should_deserialize_trigger_with_defaults() {
        let json = serde_json::json!({
            "id": TriggerId::new(),
            "name": "Audit",
            "enabled": true,
            "resource_type": "system:user",
            "script": "audit"
        });
        let trigger: Trigger = serde_json::from_value(json).unwrap();
        assert!(trigger.event_kinds.is_empty());
        assert!(trigger.constraints.is_empty());
        assert_eq!(trigger.to_string(), "Audit(system:user → audit)");
    }
}
