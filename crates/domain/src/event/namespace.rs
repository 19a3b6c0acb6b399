//! Namespace events.

use crate::error::HooklineError;
use crate::event::ResourceEvent;
use crate::event::args::{self, Args, keys};
use crate::invoker::Invoker;
use crate::namespace::Namespace;

/// Resource variant for `compose:namespace`.
///
/// Encodes to `namespace`, `oldNamespace` (when present) and `invoker`.
/// Accepts a sole `result`/`namespace` or `invoker` entry on decode.
#[derive(Debug, Clone)]
pub struct NamespaceEvent {
    namespace: Namespace,
    old_namespace: Option<Namespace>,
    invoker: Invoker,
}

impl NamespaceEvent {
    pub const RESOURCE_TYPE: &'static str = "compose:namespace";

    #[must_use]
    pub fn new(namespace: Namespace, old_namespace: Option<Namespace>, invoker: Invoker) -> Self {
        Self {
            namespace,
            old_namespace,
            invoker,
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub fn old_namespace(&self) -> Option<&Namespace> {
        self.old_namespace.as_ref()
    }

    #[must_use]
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    #[must_use]
    pub fn into_namespace(self) -> Namespace {
        self.namespace
    }
}

impl ResourceEvent for NamespaceEvent {
    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    fn has_previous(&self) -> bool {
        self.old_namespace.is_some()
    }

    fn encode(&self) -> Result<Args, HooklineError> {
        let mut out = Args::new();
        args::put(&mut out, keys::NAMESPACE, &self.namespace)?;
        if let Some(old) = &self.old_namespace {
            args::put(&mut out, keys::OLD_NAMESPACE, old)?;
        }
        args::put(&mut out, keys::INVOKER, &self.invoker)?;
        Ok(out)
    }

    fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        match args::sole_entry(results) {
            Some((key @ (keys::RESULT | keys::NAMESPACE), raw)) => {
                args::merge_validated(&mut self.namespace, key, raw, Namespace::validate)?;
            }
            Some((key @ keys::INVOKER, raw)) => args::merge_into(&mut self.invoker, key, raw)?,
            _ => {}
        }
        Ok(())
    }
}
