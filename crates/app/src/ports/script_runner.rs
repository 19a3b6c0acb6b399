//! Script runner port — hands encoded event arguments to an automation script.

use std::future::Future;

use hookline_domain::error::HooklineError;
use hookline_domain::event::Args;

/// Executes an automation script with an argument mapping and returns the
/// script's result mapping.
///
/// Timeouts and cancellation are the runner's business: a cancelled script
/// should come back as an empty mapping or an error, never hang the caller.
pub trait ScriptRunner {
    /// Run `script` with `args`.
    ///
    /// Errors are surfaced as [`HooklineError::Runner`] and are not retried
    /// by the caller.
    fn run(
        &self,
        script: &str,
        args: Args,
    ) -> impl Future<Output = Result<Args, HooklineError>> + Send;
}

impl<T: ScriptRunner + Send + Sync> ScriptRunner for std::sync::Arc<T> {
    fn run(
        &self,
        script: &str,
        args: Args,
    ) -> impl Future<Output = Result<Args, HooklineError>> + Send {
        (**self).run(script, args)
    }
}
