//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HooklineError`]
//! via `#[from]` (or an explicit `From` impl for boxed adapter errors).

use crate::event::EventKind;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HooklineError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A field could not be serialized into the argument mapping.
    #[error("encode error")]
    Encode(#[from] EncodeError),

    /// A script result could not be merged back into the resource.
    #[error("decode error")]
    Decode(#[from] DecodeError),

    /// The script runner failed; the source is opaque to the core.
    #[error("script runner error")]
    Runner(Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("email must not be empty")]
    EmptyEmail,

    #[error("handle {0:?} is not valid")]
    InvalidHandle(String),

    #[error("record value must name its field")]
    EmptyValueName,

    #[error("trigger script must not be empty")]
    EmptyScript,

    #[error("trigger resource type must not be empty")]
    EmptyResourceType,

    #[error("constraint {name:?} has no values")]
    EmptyConstraintValues { name: String },

    #[error("constraint {name:?} uses unknown operator {op:?}")]
    UnknownOperator { name: String, op: String },

    #[error("{kind} event must not carry a previous state")]
    UnexpectedPrevious { kind: EventKind },

    #[error("{kind} event requires a previous state")]
    MissingPrevious { kind: EventKind },
}

/// Serializing one argument field failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode argument {key:?}")]
pub struct EncodeError {
    pub key: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Deserializing one result field failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to decode result {key:?}")]
pub struct DecodeError {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}
