use super::Lifecycle;
use crate::error::WtError;

impl Lifecycle<'_> {
    /// Raw `worktree list` output, unformatted
    ///
    /// # Errors
    /// Returns an error if listing the worktrees fails
    pub fn list(&self) -> Result<String, WtError> {
        self.vcs.list_worktrees(&self.cwd)
    }
}
