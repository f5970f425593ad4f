//! Runner process invocation and raw output capture.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use specter_proto::{DiscoveryError, Result};

use crate::config::RunnerConfig;
use crate::output;

/// Raw bytes captured from a successful runner invocation.
#[derive(Debug)]
pub struct RunnerOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Spawns the configured runner and collects everything it writes.
#[derive(Debug, Clone)]
pub struct RunnerInvoker {
    command: String,
    args: Vec<String>,
}

impl RunnerInvoker {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Runs the command in `workdir`, draining both pipes before the
    /// exit status is inspected. A non-zero exit fails with the runner's
    /// stderr attached.
    pub async fn invoke(&self, workdir: &Path) -> Result<RunnerOutput> {
        debug!(
            command = %self.command,
            args = ?self.args,
            workdir = %workdir.display(),
            "invoking runner"
        );
        let child = Command::new(&self.command)
            .args(&self.args)
            .current_dir(workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| DiscoveryError::ProcessLaunch {
                command: self.command.clone(),
                source,
            })?;

        let collected = child
            .wait_with_output()
            .await
            .map_err(|source| DiscoveryError::ProcessLaunch {
                command: self.command.clone(),
                source,
            })?;

        if !collected.status.success() {
            let code = collected.status.code().unwrap_or(-1);
            return Err(DiscoveryError::RunnerExit {
                code,
                stderr: output::decode_lossy(&collected.stderr),
            });
        }

        Ok(RunnerOutput {
            stdout: collected.stdout,
            stderr: collected.stderr,
        })
    }
}
