//! Sequential run walker that replays a discovered tree as events.

use std::future::Future;
use std::pin::Pin;

use tracing::debug;

use specter_proto::{RunEvent, SuiteState, TestNode, TestState};

/// Callback receiving run progress events.
pub type EventSink = Box<dyn Fn(RunEvent) + Send + Sync>;

/// Walks selected nodes of a discovered tree, reporting progress through
/// an event sink.
pub struct RunWalker {
    sink: EventSink,
}

impl RunWalker {
    pub fn new(sink: EventSink) -> Self {
        Self { sink }
    }

    /// Replays each selected id in order. Ids that do not resolve to a
    /// node in the tree are skipped.
    pub async fn run(&self, tree: &TestNode, selection: &[String]) {
        for id in selection {
            match tree.find(id) {
                Some(node) => self.walk(node).await,
                None => debug!(id = %id, "selection does not match any node"),
            }
        }
    }

    /// Depth-first walk of one node. A suite completes only after every
    /// child has finished; a test passes as soon as it starts.
    fn walk<'a>(&'a self, node: &'a TestNode) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            match node {
                TestNode::Suite(suite) => {
                    self.emit(RunEvent::suite(suite.id.as_str(), SuiteState::Running));
                    for child in &suite.children {
                        self.walk(child).await;
                    }
                    self.emit(RunEvent::suite(suite.id.as_str(), SuiteState::Completed));
                }
                TestNode::Test(test) => {
                    self.emit(RunEvent::test(test.id.as_str(), TestState::Running));
                    self.emit(RunEvent::test(test.id.as_str(), TestState::Passed));
                }
            }
        })
    }

    fn emit(&self, event: RunEvent) {
        (self.sink)(event);
    }
}
