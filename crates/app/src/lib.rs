//! # hookline-app
//!
//! Application layer — the trigger dispatcher and its **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that adapters must implement (driven/outbound port):
//!   - `ScriptRunner` — run an automation script against an argument mapping
//! - Provide the **driving use-case**:
//!   - `TriggerDispatcher` — evaluate trigger constraints against an event,
//!     run the fired scripts, decode their results back into the event
//! - Orchestrate domain objects without knowing *how* scripts are executed
//!
//! ## Dependency rule
//! Depends on `hookline-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod ports;

pub use dispatcher::{DispatchReport, TriggerDispatcher, TriggerOutcome};
