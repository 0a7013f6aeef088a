//! Project discovery.
//!
//! A project is a top-level repository directory that contains a
//! `README.md`. Directories without one are silently filtered out, and a
//! transient fetch failure while probing one directory is treated as "no
//! README" for that directory only; it never aborts discovery of the
//! rest.

use crate::error::{Result, SherpaError};
use crate::github::GithubClient;

/// A discovered sub-project. Immutable after discovery.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory name.
    pub name: String,
    /// Path relative to the repository root.
    pub path: String,
    /// Raw README.md text.
    pub readme: String,
}

/// Discover projects in the repository's top level.
///
/// The result preserves the remote listing order. Only a failure to list
/// the root itself is an error.
pub fn discover(client: &GithubClient) -> Result<Vec<Project>> {
    let entries = client.list_root()?;
    let mut projects = Vec::new();

    for entry in entries.iter().filter(|e| e.is_dir()) {
        let readme_path = format!("{}/README.md", entry.path);
        match client.fetch_file(&readme_path) {
            Ok(readme) => {
                tracing::debug!(project = %entry.name, "found README");
                projects.push(Project {
                    name: entry.name.clone(),
                    path: entry.path.clone(),
                    readme,
                });
            }
            Err(SherpaError::FileNotFound { .. }) => {
                tracing::debug!(directory = %entry.name, "no README, skipping");
            }
            Err(e) => {
                // Per-directory fault tolerance: downgrade and move on
                tracing::warn!(directory = %entry.name, error = %e, "README probe failed, skipping");
            }
        }
    }

    Ok(projects)
}
