//! The worktree lifecycle: one file per command.
//!
//! Each command runs against a [`Lifecycle`], which bundles the injected
//! capabilities (version control, selection prompt, reporter, config) with the
//! caller's working directory. Commands hold no state between calls.

use std::path::{Path, PathBuf};

use crate::config::WtConfig;
use crate::error::WtError;
use crate::listing::{WorktreeRecord, parse_listing, resolve_bare_root};
use crate::report::Reporter;
use crate::selection::{Selection, SelectionProvider, select_worktree};
use crate::traits::VersionControl;

pub mod add;
pub mod bare;
pub mod init;
pub mod list;
pub mod remove;
pub mod switch;

/// Where the caller should end up after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Change into this directory
    Navigate(PathBuf),
    /// Nothing to do, stay where you are
    NoOp,
    /// The command failed; the failure has already been reported
    Failed,
}

/// The injected capabilities and working directory every command runs against
pub struct Lifecycle<'a> {
    vcs: &'a dyn VersionControl,
    selector: &'a dyn SelectionProvider,
    reporter: &'a dyn Reporter,
    config: &'a WtConfig,
    cwd: PathBuf,
}

impl<'a> Lifecycle<'a> {
    #[must_use]
    pub fn new(
        vcs: &'a dyn VersionControl,
        selector: &'a dyn SelectionProvider,
        reporter: &'a dyn Reporter,
        config: &'a WtConfig,
        cwd: PathBuf,
    ) -> Self {
        Self {
            vcs,
            selector,
            reporter,
            config,
            cwd,
        }
    }

    /// A fresh listing snapshot, queried from the caller's directory
    fn snapshot(&self) -> Result<Vec<WorktreeRecord>, WtError> {
        Ok(parse_listing(&self.vcs.list_worktrees(&self.cwd)?))
    }

    fn bare_root(&self) -> Result<PathBuf, WtError> {
        let records = self.snapshot()?;
        resolve_bare_root(&records).map(Path::to_path_buf)
    }

    /// Runs the interactive selector over the non-bare worktrees of a snapshot
    fn select(&self, records: &[WorktreeRecord]) -> Result<Selection, WtError> {
        select_worktree(
            records,
            true,
            &self.config.prompt,
            self.selector,
            self.reporter,
        )
    }
}
