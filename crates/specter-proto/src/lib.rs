//! Shared data model for the specter test explorer backend.
//!
//! This crate defines the discovered test tree, the run progress events,
//! and the discovery error taxonomy. It stays free of process and IO
//! concerns so frontends can depend on it directly.

pub mod error;
pub mod event;
pub mod tree;

pub use error::{DiscoveryError, Result};
pub use event::{RunEvent, SuiteState, TestState};
pub use tree::{SuiteNode, TestCase, TestNode};
