//! Module — the schema that records inside a namespace conform to.

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::id::{ModuleId, NamespaceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(rename = "moduleID")]
    pub id: ModuleId,
    #[serde(rename = "namespaceID")]
    pub namespace_id: NamespaceId,
    pub handle: String,
    pub name: String,
}

impl Module {
    /// Create a module inside `namespace_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HooklineError::Validation`] when `name` is empty or `handle`
    /// is set but malformed.
    pub fn new(
        namespace_id: NamespaceId,
        handle: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, HooklineError> {
        let module = Self {
            id: ModuleId::new(),
            namespace_id,
            handle: handle.into(),
            name: name.into(),
        };
        if module.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !module.handle.is_empty() && !crate::handle::is_valid(&module.handle) {
            return Err(ValidationError::InvalidHandle(module.handle).into());
        }
        Ok(module)
    }
}
