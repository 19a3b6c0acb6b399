//! Process runner error types.

use hookline_domain::error::HooklineError;

/// Errors specific to the process script runner.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The configured command could not be spawned or talked to.
    #[error("script process I/O failed")]
    Io(#[from] std::io::Error),

    /// An argument value or the script's stdout was not valid JSON.
    #[error("script payload is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The script's stdout parsed but does not have the expected shape.
    #[error("invalid script payload: {0}")]
    InvalidPayload(String),

    /// The script did not finish within the configured timeout.
    #[error("script {script:?} timed out after {millis}ms")]
    Timeout { script: String, millis: u128 },

    /// The script exited unsuccessfully.
    #[error("script {script:?} exited with {status}: {stderr}")]
    ExitStatus {
        script: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

impl From<RunnerError> for HooklineError {
    fn from(err: RunnerError) -> Self {
        HooklineError::Runner(Box::new(err))
    }
}
