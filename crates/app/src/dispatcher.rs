//! Trigger dispatcher — decides which triggers an event fires and runs them.
//!
//! For one envelope the order is fixed: every trigger's constraints are
//! evaluated first, then each fired trigger runs encode → script → decode in
//! turn. A failing trigger is recorded in the [`DispatchReport`] and the
//! remaining triggers still run.

use hookline_domain::error::HooklineError;
use hookline_domain::event::{Envelope, ResourceEvent};
use hookline_domain::id::TriggerId;
use hookline_domain::trigger::Trigger;

use crate::ports::ScriptRunner;

/// Triggers that listen to `envelope` and whose every constraint matches
/// (logical AND), in the order they were given.
pub fn matching<'t, R: ResourceEvent>(
    envelope: &Envelope<R>,
    triggers: &'t [Trigger],
) -> Vec<&'t Trigger> {
    triggers
        .iter()
        .filter(|t| t.handles(envelope.resource_type(), envelope.kind()))
        .filter(|t| t.constraints.iter().all(|c| envelope.matches(c)))
        .collect()
}

/// Runs the scripts of matching triggers against an event.
pub struct TriggerDispatcher<SR> {
    runner: SR,
}

impl<SR: ScriptRunner> TriggerDispatcher<SR> {
    /// Create a new dispatcher backed by `runner`.
    pub fn new(runner: SR) -> Self {
        Self { runner }
    }

    /// Evaluate `triggers` against `envelope` and run every one that fires.
    ///
    /// The envelope is borrowed mutably for the whole dispatch, so script
    /// results are decoded into it one trigger at a time; later triggers
    /// see what earlier ones wrote.
    #[tracing::instrument(
        skip_all,
        fields(resource = envelope.resource_type(), kind = %envelope.kind())
    )]
    pub async fn dispatch<R: ResourceEvent>(
        &self,
        envelope: &mut Envelope<R>,
        triggers: &[Trigger],
    ) -> DispatchReport {
        let fired = matching(envelope, triggers);
        tracing::debug!(
            candidates = triggers.len(),
            fired = fired.len(),
            "evaluated trigger constraints"
        );

        let mut outcomes = Vec::with_capacity(fired.len());
        for trigger in fired {
            let result = self.run_trigger(envelope, trigger).await;
            if let Err(err) = &result {
                tracing::warn!(trigger = %trigger.id, script = %trigger.script, error = %err, "trigger failed");
            }
            outcomes.push(TriggerOutcome {
                trigger_id: trigger.id,
                result,
            });
        }

        DispatchReport { outcomes }
    }

    async fn run_trigger<R: ResourceEvent>(
        &self,
        envelope: &mut Envelope<R>,
        trigger: &Trigger,
    ) -> Result<(), HooklineError> {
        let args = envelope.encode()?;
        let results = self.runner.run(&trigger.script, args).await?;
        envelope.decode(&results)
    }
}

/// What happened to one fired trigger.
#[derive(Debug)]
pub struct TriggerOutcome {
    pub trigger_id: TriggerId,
    pub result: Result<(), HooklineError>,
}

/// Per-trigger outcomes of one dispatch, in firing order.
#[derive(Debug, Default)]
pub struct DispatchReport {
    outcomes: Vec<TriggerOutcome>,
}

impl DispatchReport {
    #[must_use]
    pub fn outcomes(&self) -> &[TriggerOutcome] {
        &self.outcomes
    }

    /// Ids of every trigger that fired, whether or not its script succeeded.
    #[must_use]
    pub fn fired(&self) -> Vec<TriggerId> {
        self.outcomes.iter().map(|o| o.trigger_id).collect()
    }

    pub fn failures(&self) -> impl Iterator<Item = &TriggerOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Collapse into the fired ids, or the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first trigger that failed.
    pub fn into_result(self) -> Result<Vec<TriggerId>, HooklineError> {
        let mut fired = Vec::with_capacity(self.outcomes.len());
        for outcome in self.outcomes {
            outcome.result?;
            fired.push(outcome.trigger_id);
        }
        Ok(fired)
    }
}
