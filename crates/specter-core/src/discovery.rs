//! End-to-end discovery pipeline, from process launch to test tree.

use std::path::Path;

use tracing::{debug, info, warn};

use specter_proto::{Result, TestNode};

use crate::config::SpecterConfig;
use crate::hierarchy;
use crate::output;
use crate::report::{self, ReportSummary};
use crate::runner::RunnerInvoker;
use crate::workspace;

/// Everything discovery learns from one runner invocation.
#[derive(Debug)]
pub struct Discovery {
    pub tree: TestNode,
    pub summary: ReportSummary,
    pub summary_line: Option<String>,
}

/// Drives the discovery pipeline for a workspace.
pub struct TestExplorer {
    config: SpecterConfig,
}

impl TestExplorer {
    pub fn new(config: SpecterConfig) -> Self {
        Self { config }
    }

    /// Runs the configured runner in `dir` and builds the test tree from
    /// its report. `None` discovers in the process working directory.
    pub async fn discover(&self, dir: Option<&Path>) -> Result<Discovery> {
        let workdir = workspace::resolve(dir)?;
        info!(workspace = %workdir.display(), "discovering examples");

        let invoker = RunnerInvoker::new(&self.config.runner);
        let raw = invoker.invoke(&workdir).await?;
        let text = output::decode_stdout(&raw.stdout, &raw.stderr)?;
        let payload = output::extract_payload(&text)?;
        self.mirror_payload(payload);

        let parsed = report::parse_report(payload)?;
        debug!(examples = parsed.examples.len(), "parsed runner report");

        let tree = hierarchy::build_tree(parsed.examples)?;
        info!(
            tests = tree.test_count(),
            suites = tree.suite_count(),
            "discovery complete"
        );
        Ok(Discovery {
            tree,
            summary: parsed.summary,
            summary_line: parsed.summary_line,
        })
    }

    /// Mirrors the extracted payload to the diagnostic artifact path.
    /// Failing to write never fails discovery.
    fn mirror_payload(&self, payload: &str) {
        if !self.config.artifact.enabled {
            return;
        }
        let path = self.config.artifact.resolved_path();
        match std::fs::write(&path, payload) {
            Ok(()) => debug!(path = %path.display(), "payload artifact written"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not write payload artifact"),
        }
    }
}
