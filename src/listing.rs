//! Parsing of `git worktree list` output.
//!
//! The listing is human-oriented text, one worktree per line:
//!
//! ```text
//! /home/me/project        (bare)
//! /home/me/project/main   1a2b3c4 [main]
//! /home/me/project/fix-x  5d6e7f8 [fix-x]
//! ```
//!
//! Parsing is permissive. Blank lines are skipped and nothing is validated
//! beyond "the first token is the path".

use std::path::{Path, PathBuf};

use crate::error::WtError;

/// Marker git prints after the path of the bare repository
pub const BARE_MARKER: &str = "(bare)";

/// One line of a worktree listing snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeRecord {
    pub path: PathBuf,
    pub is_bare: bool,
    /// Everything after the path, e.g. `1a2b3c4 [main]`. Empty for bare records.
    pub branch_label: String,
    line: String,
}

impl WorktreeRecord {
    /// Parses a single listing line, returning `None` for blank lines
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let path = tokens.next()?;
        let is_bare = line.contains(BARE_MARKER);
        let branch_label = if is_bare {
            String::new()
        } else {
            tokens.collect::<Vec<_>>().join(" ")
        };

        Some(Self {
            path: PathBuf::from(path),
            is_bare,
            branch_label,
            line: line.trim_end().to_string(),
        })
    }

    /// The listing line this record came from, as shown to the user when selecting
    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Branch name from the `[branch]` part of the label, if the worktree has one
    #[must_use]
    pub fn branch_name(&self) -> Option<&str> {
        let start = self.branch_label.find('[')?;
        let end = self.branch_label[start..].find(']')? + start;
        Some(&self.branch_label[start + 1..end])
    }

    /// Last path segment, which is also the name git gives the worktree
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().to_string()
            })
    }
}

/// Parses the raw output of `git worktree list` into an ordered snapshot
#[must_use]
pub fn parse_listing(listing: &str) -> Vec<WorktreeRecord> {
    listing.lines().filter_map(WorktreeRecord::parse_line).collect()
}

/// Returns the path of the bare repository in a snapshot.
///
/// Git never reports more than one bare entry; if it ever did, the first one wins.
///
/// # Errors
/// Returns [`WtError::NoBareWorktree`] when no record is flagged bare
pub fn resolve_bare_root(records: &[WorktreeRecord]) -> Result<&Path, WtError> {
    records
        .iter()
        .find(|record| record.is_bare)
        .map(|record| record.path.as_path())
        .ok_or(WtError::NoBareWorktree)
}
