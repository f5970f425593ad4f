//! Error taxonomy for the discovery pipeline.

use thiserror::Error;

/// Failures that can abort discovery.
///
/// Every variant is terminal. The pipeline surfaces the first failure it
/// hits instead of degrading to a partial tree.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The requested workspace directory does not exist or cannot be used.
    #[error("workspace directory unavailable: {path}")]
    WorkspaceUnavailable { path: String },

    /// The runner process could not be spawned at all.
    #[error("failed to launch runner '{command}': {source}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The runner started but exited unsuccessfully.
    #[error("runner exited with code {code}: {stderr}")]
    RunnerExit { code: i32, stderr: String },

    /// The runner wrote bytes that are not valid UTF-8.
    #[error("runner output is not valid UTF-8")]
    UndecodableOutput,

    /// The runner wrote nothing to stdout.
    #[error("runner produced no output: {stderr}")]
    NoOutput { stderr: String },

    /// The runner output could not be interpreted as a report.
    #[error("malformed runner payload: {reason}")]
    MalformedPayload { reason: String },
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
