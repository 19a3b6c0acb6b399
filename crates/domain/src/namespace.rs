//! Namespace — the top-level container for modules and records.

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::handle;
use crate::id::NamespaceId;
use crate::time::Timestamp;

/// A namespace groups modules, records and everything built on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    #[serde(rename = "namespaceID")]
    pub id: NamespaceId,
    pub name: String,
    /// URL-friendly handle; may be empty.
    pub slug: String,
    pub enabled: bool,
    #[serde(default)]
    pub meta: NamespaceMeta,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

/// Free-form presentation data attached to a [`Namespace`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceMeta {
    pub subtitle: String,
    pub description: String,
}

impl Namespace {
    /// Create a builder for constructing a [`Namespace`].
    #[must_use]
    pub fn builder() -> NamespaceBuilder {
        NamespaceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `slug` is set but not a valid handle ([`ValidationError::InvalidHandle`])
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !self.slug.is_empty() && !handle::is_valid(&self.slug) {
            return Err(ValidationError::InvalidHandle(self.slug.clone()).into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Namespace`].
#[derive(Debug, Default)]
pub struct NamespaceBuilder {
    id: Option<NamespaceId>,
    name: Option<String>,
    slug: Option<String>,
    enabled: Option<bool>,
    meta: NamespaceMeta,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl NamespaceBuilder {
    #[must_use]
    pub fn id(mut self, id: NamespaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn meta(mut self, meta: NamespaceMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn created_at(mut self, ts: Timestamp) -> Self {
        self.created_at = Some(ts);
        self
    }

    #[must_use]
    pub fn updated_at(mut self, ts: Timestamp) -> Self {
        self.updated_at = Some(ts);
        self
    }

    /// Consume the builder, validate, and return a [`Namespace`].
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] if the name is missing or the slug is malformed.
    pub fn build(self) -> Result<Namespace, HooklineError> {
        let namespace = Namespace {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            slug: self.slug.unwrap_or_default(),
            enabled: self.enabled.unwrap_or(true),
            meta: self.meta,
            created_at: self.created_at.unwrap_or_else(crate::time::now),
            updated_at: self.updated_at,
            deleted_at: None,
        };
        namespace.validate()?;
        Ok(namespace)
    }
}
