//! Discovery and run-reporting engine for the specter backend.
//!
//! The core crate owns the whole discovery pipeline, from launching the
//! configured runner through building the test tree, plus the walker
//! that replays a discovered tree as run progress events.

pub mod config;
pub mod discovery;
pub mod hierarchy;
pub mod output;
pub mod report;
pub mod runner;
pub mod walker;
pub mod workspace;

pub use config::{ArtifactConfig, ConfigError, RunnerConfig, SpecterConfig};
pub use discovery::{Discovery, TestExplorer};
pub use walker::{EventSink, RunWalker};
