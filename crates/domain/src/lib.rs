//! # hookline-domain
//!
//! Pure domain model for hookline, the event layer of a trigger-based
//! automation subsystem.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps, handles
//! - Define the automatable **resources** (namespaces, modules, records, roles, users)
//!   and the **invoker** an event is attributed to
//! - Define **events**: an [`event::Envelope`] pairs an [`event::EventKind`] with a
//!   resource variant implementing [`event::ResourceEvent`] (match / encode / decode)
//! - Define the **argument mapping** that crosses the scripting boundary
//! - Define **triggers** and their **constraints**
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod handle;
pub mod id;
pub mod time;

pub mod event;
pub mod invoker;
pub mod module;
pub mod namespace;
pub mod record;
pub mod role;
pub mod trigger;
pub mod user;
