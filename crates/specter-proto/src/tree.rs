//! Test tree data model shared by discovery and run reporting.

use serde::{Deserialize, Serialize};

/// A node in the discovered test tree.
///
/// Serialized with a `type` tag so consumers can tell suites from tests
/// without inspecting the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TestNode {
    Suite(SuiteNode),
    Test(TestCase),
}

/// A group of tests sharing a common description prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteNode {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub children: Vec<TestNode>,
}

/// A single runnable example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl SuiteNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            file: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TestNode>) -> Self {
        self.children = children;
        self
    }
}

impl TestCase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            file: None,
            line: None,
        }
    }
}

impl TestNode {
    /// Identifier of this node.
    pub fn id(&self) -> &str {
        match self {
            TestNode::Suite(suite) => &suite.id,
            TestNode::Test(test) => &test.id,
        }
    }

    /// Human-readable label of this node.
    pub fn label(&self) -> &str {
        match self {
            TestNode::Suite(suite) => &suite.label,
            TestNode::Test(test) => &test.label,
        }
    }

    /// Finds the node with the given id, checking this node before
    /// descending into children in order. Returns the first match.
    pub fn find(&self, id: &str) -> Option<&TestNode> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            TestNode::Suite(suite) => suite.children.iter().find_map(|child| child.find(id)),
            TestNode::Test(_) => None,
        }
    }

    /// Number of test cases in this subtree.
    pub fn test_count(&self) -> usize {
        match self {
            TestNode::Suite(suite) => suite.children.iter().map(TestNode::test_count).sum(),
            TestNode::Test(_) => 1,
        }
    }

    /// Number of suites in this subtree, including this one.
    pub fn suite_count(&self) -> usize {
        match self {
            TestNode::Suite(suite) => {
                1 + suite
                    .children
                    .iter()
                    .map(TestNode::suite_count)
                    .sum::<usize>()
            }
            TestNode::Test(_) => 0,
        }
    }
}
