//! Run progress events emitted while walking the test tree.

use serde::{Deserialize, Serialize};

/// Lifecycle states reported for a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteState {
    Running,
    Completed,
}

/// Lifecycle states reported for a single test.
///
/// Reported runs never execute examples, so a walked test only moves
/// from `Running` to `Passed`. The remaining states exist for adapters
/// that replay real runner results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestState {
    Running,
    Passed,
    Failed,
    Skipped,
    Errored,
}

/// A single progress report tied to a node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RunEvent {
    Suite { suite: String, state: SuiteState },
    Test { test: String, state: TestState },
}

impl RunEvent {
    pub fn suite(id: impl Into<String>, state: SuiteState) -> Self {
        RunEvent::Suite {
            suite: id.into(),
            state,
        }
    }

    pub fn test(id: impl Into<String>, state: TestState) -> Self {
        RunEvent::Test {
            test: id.into(),
            state,
        }
    }

    /// Id of the node this event reports on.
    pub fn node_id(&self) -> &str {
        match self {
            RunEvent::Suite { suite, .. } => suite,
            RunEvent::Test { test, .. } => test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_event_wire_shape() {
        let event = RunEvent::suite("root", SuiteState::Running);
        let value = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(value["type"], "suite");
        assert_eq!(value["suite"], "root");
        assert_eq!(value["state"], "running");
    }

    #[test]
    fn test_test_event_wire_shape() {
        let event = RunEvent::test("./spec/widget_spec.rb[1:1]", TestState::Passed);
        let value = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(value["type"], "test");
        assert_eq!(value["test"], "./spec/widget_spec.rb[1:1]");
        assert_eq!(value["state"], "passed");
    }

    #[test]
    fn test_states_serialize_lowercase() {
        let completed = serde_json::to_value(SuiteState::Completed).expect("state serializes");
        assert_eq!(completed, "completed");
        let errored = serde_json::to_value(TestState::Errored).expect("state serializes");
        assert_eq!(errored, "errored");
    }

    #[test]
    fn test_node_id_matches_either_variant() {
        assert_eq!(
            RunEvent::suite("Widget ", SuiteState::Completed).node_id(),
            "Widget "
        );
        assert_eq!(RunEvent::test("t1", TestState::Running).node_id(), "t1");
    }
}
