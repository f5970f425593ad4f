//! Runner report schema and payload parsing.

use serde::Deserialize;

use specter_proto::{DiscoveryError, Result};

/// Top-level document produced by `rspec --dry-run -f json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerReport {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    pub examples: Vec<ExampleRecord>,
    pub summary: ReportSummary,
    #[serde(default)]
    pub summary_line: Option<String>,
}

/// One discovered example, flat as the runner reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleRecord {
    pub id: String,
    pub description: String,
    pub full_description: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub run_time: Option<f64>,
    #[serde(default)]
    pub pending_message: Option<String>,
}

/// Aggregate counts reported alongside the examples.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSummary {
    pub duration: f64,
    pub example_count: u32,
    pub failure_count: u32,
    pub pending_count: u32,
    pub errors_outside_of_examples_count: u32,
}

/// Parses an extracted payload into a report.
pub fn parse_report(payload: &str) -> Result<RunnerReport> {
    serde_json::from_str(payload).map_err(|e| DiscoveryError::MalformedPayload {
        reason: e.to_string(),
    })
}
