use std::path::Path;

use crate::error::WtError;

/// The version-control operations the worktree lifecycle depends on.
///
/// Every call names the directory it runs in, so implementations never rely on
/// the process working directory.
pub trait VersionControl {
    /// Raw `worktree list` output
    fn list_worktrees(&self, cwd: &Path) -> Result<String, WtError>;
    fn add_worktree(&self, cwd: &Path, args: &[String]) -> Result<(), WtError>;
    fn remove_worktree(&self, cwd: &Path, worktree: &Path, force: bool) -> Result<(), WtError>;
    fn fetch_all(&self, cwd: &Path) -> Result<(), WtError>;
    fn merge(&self, cwd: &Path, branch_ref: &str) -> Result<(), WtError>;
    /// Default branch of `remote`, or `None` when it cannot be determined
    fn default_branch(&self, cwd: &Path, remote: &str) -> Option<String>;
}
