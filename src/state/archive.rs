//! Authoritative archive-editor state.
//!
//! DESIGN
//! ======
//! The editor retains the archive record and its projects as fetched JSON
//! instead of reverse-parsing rendered swatch colors and inline pixel styles
//! out of the page. Edit-form prefill reads from these records directly.

#[cfg(test)]
#[path = "archive_test.rs"]
mod archive_test;

use crate::net::types::{ArchiveRecord, ProjectRecord};

/// Archive record, project list, and load status for the editor page.
#[derive(Clone, Debug, Default)]
pub struct ArchiveState {
    pub archive: Option<ArchiveRecord>,
    pub projects: Vec<ProjectRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ArchiveState {
    /// Look up a retained project record by id.
    pub fn project(&self, project_id: i64) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == project_id)
    }
}

/// Validate a typed archive-deletion confirmation against the actual
/// username: trimmed, case-insensitive. Returns the normalized username to
/// send, or the abort message.
pub fn confirm_archive_username(typed: &str, actual: &str) -> Result<String, &'static str> {
    let normalized = typed.trim().to_lowercase();
    if normalized == actual.trim().to_lowercase() {
        Ok(normalized)
    } else {
        Err("Username does not match. Deletion cancelled.")
    }
}
