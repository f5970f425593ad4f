//! Workspace directory resolution.

use std::path::{Path, PathBuf};

use specter_proto::{DiscoveryError, Result};

/// Resolves the directory discovery runs in.
///
/// `None` falls back to the process working directory. The resolved path
/// must be an existing directory, otherwise the runner has nowhere to
/// execute.
pub fn resolve(dir: Option<&Path>) -> Result<PathBuf> {
    let path = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|_| DiscoveryError::WorkspaceUnavailable {
            path: String::from("."),
        })?,
    };
    if !path.is_dir() {
        return Err(DiscoveryError::WorkspaceUnavailable {
            path: path.display().to_string(),
        });
    }
    Ok(path)
}
