//! # hookline-adapter-runner-process
//!
//! Script runner adapter — runs automation scripts through a local executable.
//!
//! ## Wire format
//! For each run the configured command is spawned once and receives on stdin
//!
//! ```json
//! {"script": "<name>", "args": {"namespace": {...}, "invoker": {...}}}
//! ```
//!
//! It answers with a JSON object on stdout whose entries become the result
//! mapping. Empty stdout is an empty mapping, which leaves the event unchanged.
//!
//! ## Dependency rule
//! Same as other adapters: depends on `hookline-app` and `hookline-domain`.

pub mod config;
pub mod error;

use std::collections::BTreeMap;
use std::process::Stdio;
use std::time::Duration;

use hookline_app::ports::ScriptRunner;
use hookline_domain::error::HooklineError;
use hookline_domain::event::Args;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub use config::{ConfigError, ProcessRunnerConfig};
pub use error::RunnerError;

/// [`ScriptRunner`] that spawns a process per run.
#[derive(Debug, Clone)]
pub struct ProcessScriptRunner {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

#[derive(Serialize)]
struct Request<'a> {
    script: &'a str,
    args: BTreeMap<&'a str, serde_json::Value>,
}

impl ProcessScriptRunner {
    /// Build from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `config` is invalid.
    pub fn from_config(config: &ProcessRunnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (program, args) = config
            .command
            .split_first()
            .ok_or_else(|| ConfigError::Validation("command must name a program".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            timeout: config.timeout(),
        })
    }

    /// Override the per-run timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn execute(&self, script: &str, args: &Args) -> Result<Args, RunnerError> {
        let input = encode_request(script, args)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RunnerError::InvalidPayload("stdin not captured".to_string()))?;
        let write = async move {
            let result = stdin.write_all(&input).await;
            drop(stdin);
            match result {
                // The script may legitimately ignore its input.
                Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };

        let run = async { tokio::join!(write, child.wait_with_output()) };
        let (written, output) = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| RunnerError::Timeout {
                script: script.to_string(),
                millis: self.timeout.as_millis(),
            })?;
        let output = output?;
        written?;

        if !output.status.success() {
            return Err(RunnerError::ExitStatus {
                script: script.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        decode_response(&output.stdout)
    }
}

impl ScriptRunner for ProcessScriptRunner {
    #[tracing::instrument(skip(self, args), fields(program = %self.program, keys = args.len()))]
    async fn run(&self, script: &str, args: Args) -> Result<Args, HooklineError> {
        let results = self.execute(script, &args).await.inspect_err(|err| {
            tracing::debug!(error = %err, "script run failed");
        })?;
        tracing::debug!(results = results.len(), "script finished");
        Ok(results)
    }
}

fn encode_request(script: &str, args: &Args) -> Result<Vec<u8>, RunnerError> {
    let mut values = BTreeMap::new();
    for (key, raw) in args {
        values.insert(key.as_str(), serde_json::from_slice::<serde_json::Value>(raw)?);
    }
    Ok(serde_json::to_vec(&Request {
        script,
        args: values,
    })?)
}

fn decode_response(stdout: &[u8]) -> Result<Args, RunnerError> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(Args::new());
    }
    let serde_json::Value::Object(entries) = serde_json::from_slice::<serde_json::Value>(stdout)?
    else {
        return Err(RunnerError::InvalidPayload(
            "expected a JSON object on stdout".to_string(),
        ));
    };
    let mut results = Args::new();
    for (key, value) in entries {
        results.insert(key, serde_json::to_vec(&value)?);
    }
    Ok(results)
}
