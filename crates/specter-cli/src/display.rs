//! Terminal rendering for trees and run events.

use colored::Colorize;

use specter_core::discovery::Discovery;
use specter_proto::{RunEvent, SuiteState, TestNode, TestState};

/// Renders the tree with two-space indentation per level.
pub fn render_tree(tree: &TestNode) -> String {
    let mut out = String::new();
    render_node(tree, 0, &mut out);
    out
}

fn render_node(node: &TestNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        TestNode::Suite(suite) => {
            out.push_str(&format!("{indent}{}\n", suite.label.bold()));
            for child in &suite.children {
                render_node(child, depth + 1, out);
            }
        }
        TestNode::Test(test) => {
            let location = match (&test.file, test.line) {
                (Some(file), Some(line)) => format!(" {}", format!("{file}:{line}").dimmed()),
                (Some(file), None) => format!(" {}", file.dimmed()),
                _ => String::new(),
            };
            out.push_str(&format!("{indent}{}{location}\n", test.label));
        }
    }
}

/// One human-readable line per run event.
pub fn event_line(event: &RunEvent) -> String {
    match event {
        RunEvent::Suite { suite, state } => {
            let state = match state {
                SuiteState::Running => "running".cyan(),
                SuiteState::Completed => "completed".green(),
            };
            format!("{} {suite} {state}", "suite".bold())
        }
        RunEvent::Test { test, state } => {
            let state = match state {
                TestState::Running => "running".cyan(),
                TestState::Passed => "passed".green(),
                TestState::Failed => "failed".red(),
                TestState::Errored => "errored".red(),
                TestState::Skipped => "skipped".yellow(),
            };
            format!("{}  {test} {state}", "test".bold())
        }
    }
}

/// Discovery summary line for human output.
pub fn render_summary(discovery: &Discovery) -> String {
    match &discovery.summary_line {
        Some(line) => line.clone(),
        None => format!(
            "{} examples discovered in {} suites",
            discovery.tree.test_count(),
            discovery.tree.suite_count()
        ),
    }
}
