//! Record events.
//!
//! Records are the one kind whose triggers usually need scoping, so this
//! variant understands two constraint names:
//!
//! - `namespace`: compared against the owning namespace's slug and id
//! - `module`: compared against the record's module handle and id
//!
//! Any other constraint name falls back to the default and matches.

use crate::error::HooklineError;
use crate::event::ResourceEvent;
use crate::event::args::{self, Args, keys};
use crate::invoker::Invoker;
use crate::module::Module;
use crate::namespace::Namespace;
use crate::record::Record;
use crate::trigger::Operator;

/// Resource variant for `compose:record`.
///
/// Carries the module and namespace the record lives in as read-only
/// context: they are encoded for the script but never decoded.
#[derive(Debug, Clone)]
pub struct RecordEvent {
    record: Record,
    old_record: Option<Record>,
    module: Module,
    namespace: Namespace,
    invoker: Invoker,
}

impl RecordEvent {
    pub const RESOURCE_TYPE: &'static str = "compose:record";

    #[must_use]
    pub fn new(
        record: Record,
        old_record: Option<Record>,
        module: Module,
        namespace: Namespace,
        invoker: Invoker,
    ) -> Self {
        Self {
            record,
            old_record,
            module,
            namespace,
            invoker,
        }
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[must_use]
    pub fn old_record(&self) -> Option<&Record> {
        self.old_record.as_ref()
    }

    #[must_use]
    pub fn module(&self) -> &Module {
        &self.module
    }

    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    #[must_use]
    pub fn invoker(&self) -> &Invoker {
        &self.invoker
    }

    #[must_use]
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl ResourceEvent for RecordEvent {
    fn resource_type(&self) -> &'static str {
        Self::RESOURCE_TYPE
    }

    fn has_previous(&self) -> bool {
        self.old_record.is_some()
    }

    fn matches(&self, name: &str, op: &str, values: &[String]) -> bool {
        // Unknown operators fail open, same as unknown names.
        let Ok(op) = op.parse::<Operator>() else {
            return true;
        };
        match name {
            keys::NAMESPACE => {
                let id = self.namespace.id.to_string();
                op.check(&[self.namespace.slug.as_str(), id.as_str()], values)
            }
            keys::MODULE => {
                let id = self.module.id.to_string();
                op.check(&[self.module.handle.as_str(), id.as_str()], values)
            }
            _ => true,
        }
    }

    fn encode(&self) -> Result<Args, HooklineError> {
        let mut out = Args::new();
        args::put(&mut out, keys::RECORD, &self.record)?;
        if let Some(old) = &self.old_record {
            args::put(&mut out, keys::OLD_RECORD, old)?;
        }
        args::put(&mut out, keys::MODULE, &self.module)?;
        args::put(&mut out, keys::NAMESPACE, &self.namespace)?;
        args::put(&mut out, keys::INVOKER, &self.invoker)?;
        Ok(out)
    }

    fn decode(&mut self, results: &Args) -> Result<(), HooklineError> {
        match args::sole_entry(results) {
            Some((key @ (keys::RESULT | keys::RECORD), raw)) => {
                args::merge_validated(&mut self.record, key, raw, Record::validate)?;
            }
            Some((key @ keys::INVOKER, raw)) => args::merge_into(&mut self.invoker, key, raw)?,
            _ => {}
        }
        Ok(())
    }
}
