//! Builds the one-level test tree from flat runner examples.

use specter_proto::{DiscoveryError, Result, SuiteNode, TestCase, TestNode};

use crate::report::ExampleRecord;

/// Id of the synthesized root suite.
pub const ROOT_SUITE_ID: &str = "root";
/// Label shown for the root suite.
pub const ROOT_SUITE_LABEL: &str = "rspec";

/// Groups flat examples into suites under a synthetic root.
///
/// An example whose full description equals its own description is a
/// top-level test. Everything else is grouped under a suite keyed by the
/// full description minus the trailing description, preserving the order
/// in which parents first appear. An example whose description is not a
/// suffix of its full description cannot be grouped and fails discovery.
pub fn build_tree(examples: Vec<ExampleRecord>) -> Result<TestNode> {
    let mut children: Vec<TestNode> = Vec::new();
    for example in examples {
        if example.full_description == example.description {
            children.push(TestNode::Test(test_case(example)));
            continue;
        }
        if !example.full_description.ends_with(&example.description) {
            return Err(DiscoveryError::MalformedPayload {
                reason: format!(
                    "example '{}': description is not a suffix of its full description",
                    example.id
                ),
            });
        }
        let prefix_len = example.full_description.len() - example.description.len();
        let parent_id = example.full_description[..prefix_len].to_string();
        let case = TestNode::Test(test_case(example));
        if let Some(case) = push_into_suite(&mut children, &parent_id, case) {
            let mut suite = SuiteNode::new(parent_id.clone(), parent_id);
            suite.children.push(case);
            children.push(TestNode::Suite(suite));
        }
    }
    Ok(TestNode::Suite(
        SuiteNode::new(ROOT_SUITE_ID, ROOT_SUITE_LABEL).with_children(children),
    ))
}

fn test_case(example: ExampleRecord) -> TestCase {
    TestCase {
        id: example.id,
        label: example.description,
        file: example.file_path,
        line: example.line_number,
    }
}

/// Appends `case` to the suite with the given id, or hands the case back
/// when no such suite exists yet.
fn push_into_suite(children: &mut [TestNode], id: &str, case: TestNode) -> Option<TestNode> {
    for node in children.iter_mut() {
        if let TestNode::Suite(suite) = node {
            if suite.id == id {
                suite.children.push(case);
                return None;
            }
        }
    }
    Some(case)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(id: &str, description: &str, full_description: &str) -> ExampleRecord {
        ExampleRecord {
            id: id.to_string(),
            description: description.to_string(),
            full_description: full_description.to_string(),
            status: Some(String::from("passed")),
            file_path: Some(String::from("./spec/widget_spec.rb")),
            line_number: Some(4),
            run_time: Some(0.00001),
            pending_message: None,
        }
    }

    fn children_of(tree: &TestNode) -> &[TestNode] {
        match tree {
            TestNode::Suite(suite) => &suite.children,
            TestNode::Test(_) => panic!("expected a suite"),
        }
    }

    #[test]
    fn test_empty_report_builds_bare_root() {
        let tree = build_tree(Vec::new()).expect("tree builds");
        assert_eq!(tree.id(), ROOT_SUITE_ID);
        assert_eq!(tree.label(), ROOT_SUITE_LABEL);
        assert!(children_of(&tree).is_empty());
    }

    #[test]
    fn test_top_level_examples_stay_flat() {
        let tree = build_tree(vec![
            example("u1", "boots", "boots"),
            example("u2", "shuts down", "shuts down"),
        ])
        .expect("tree builds");

        let children = children_of(&tree);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].id(), "u1");
        assert_eq!(children[0].label(), "boots");
        assert_eq!(children[1].id(), "u2");
        assert!(matches!(children[0], TestNode::Test(_)));
    }

    #[test]
    fn test_grouped_example_creates_suite_with_prefix_id() {
        let tree = build_tree(vec![example("w1", "works", "Widget works")]).expect("tree builds");

        let children = children_of(&tree);
        assert_eq!(children.len(), 1);
        match &children[0] {
            TestNode::Suite(suite) => {
                assert_eq!(suite.id, "Widget ");
                assert_eq!(suite.label, "Widget ");
                assert_eq!(suite.children.len(), 1);
                assert_eq!(suite.children[0].label(), "works");
            }
            TestNode::Test(_) => panic!("expected a suite"),
        }
    }

    #[test]
    fn test_examples_with_same_prefix_share_one_suite() {
        let tree = build_tree(vec![
            example("w1", "renders", "Widget renders"),
            example("w2", "updates", "Widget updates"),
        ])
        .expect("tree builds");

        let children = children_of(&tree);
        assert_eq!(children.len(), 1);
        match &children[0] {
            TestNode::Suite(suite) => {
                assert_eq!(suite.children.len(), 2);
                assert_eq!(suite.children[0].id(), "w1");
                assert_eq!(suite.children[1].id(), "w2");
            }
            TestNode::Test(_) => panic!("expected a suite"),
        }
    }

    #[test]
    fn test_interleaved_groups_keep_first_appearance_order() {
        let tree = build_tree(vec![
            example("a1", "adds", "Cart adds"),
            example("s1", "boots", "boots"),
            example("b1", "lists", "Catalog lists"),
            example("a2", "removes", "Cart removes"),
        ])
        .expect("tree builds");

        let children = children_of(&tree);
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].id(), "Cart ");
        assert_eq!(children[1].id(), "s1");
        assert_eq!(children[2].id(), "Catalog ");
        assert_eq!(children[0].test_count(), 2);
    }

    #[test]
    fn test_non_suffix_description_fails_discovery() {
        let err = build_tree(vec![example("bad1", "something else", "Widget works")])
            .expect_err("build fails");
        match err {
            DiscoveryError::MalformedPayload { reason } => {
                assert!(reason.contains("bad1"), "reason: {reason}");
                assert!(reason.contains("suffix"), "reason: {reason}");
            }
            other => panic!("expected MalformedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_case_carries_file_and_line() {
        let mut record = example("w1", "works", "Widget works");
        record.file_path = Some(String::from("./spec/widget_spec.rb"));
        record.line_number = Some(12);
        let tree = build_tree(vec![record]).expect("tree builds");

        let case = tree.find("w1").expect("test should be found");
        match case {
            TestNode::Test(case) => {
                assert_eq!(case.file.as_deref(), Some("./spec/widget_spec.rb"));
                assert_eq!(case.line, Some(12));
            }
            TestNode::Suite(_) => panic!("expected a test"),
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let records = vec![
            example("w1", "renders", "Widget renders"),
            example("s1", "boots", "boots"),
            example("w2", "updates", "Widget updates"),
        ];
        let first = build_tree(records.clone()).expect("tree builds");
        let second = build_tree(records).expect("tree builds");
        assert_eq!(first, second);
        assert_eq!(first.test_count(), 3);
        assert_eq!(first.suite_count(), 2);
    }
}
