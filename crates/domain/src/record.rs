//! Record — a row of user data shaped by a [`Module`](crate::module::Module).

use serde::{Deserialize, Serialize};

use crate::error::{HooklineError, ValidationError};
use crate::id::{ModuleId, NamespaceId, RecordId, UserId};
use crate::module::Module;
use crate::time::Timestamp;

/// One stored value of a record field.
///
/// Multi-value fields are stored as several values with the same `name`
/// and increasing `place`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordValue {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub place: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "recordID")]
    pub id: RecordId,
    #[serde(rename = "moduleID")]
    pub module_id: ModuleId,
    #[serde(rename = "namespaceID")]
    pub namespace_id: NamespaceId,
    #[serde(default)]
    pub values: Vec<RecordValue>,
    pub owned_by: UserId,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

impl Record {
    /// Create an empty record for `module`, owned by `owner`.
    #[must_use]
    pub fn new(module: &Module, owner: UserId) -> Self {
        Self {
            id: RecordId::new(),
            module_id: module.id,
            namespace_id: module.namespace_id,
            values: Vec::new(),
            owned_by: owner,
            created_at: crate::time::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Append a value for field `name`, placed after any existing values of that field.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let place = self.values.iter().filter(|v| v.name == name).count();
        self.values.push(RecordValue {
            name,
            value: value.into(),
            place: u32::try_from(place).unwrap_or(u32::MAX),
        });
        self
    }

    /// Check that every value names the field it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValueName`] for a value with an empty name.
    pub fn validate(&self) -> Result<(), HooklineError> {
        if self.values.iter().any(|v| v.name.is_empty()) {
            return Err(ValidationError::EmptyValueName.into());
        }
        Ok(())
    }

    /// First value of field `name`, if any.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .filter(|v| v.name == name)
            .min_by_key(|v| v.place)
            .map(|v| v.value.as_str())
    }
}
