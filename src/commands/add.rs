use super::{Lifecycle, Outcome};
use crate::error::WtError;

impl Lifecycle<'_> {
    /// Creates a worktree under the bare repository and syncs it with the
    /// remote's default branch.
    ///
    /// `path_spec` is passed to `worktree add` verbatim; its first element is the
    /// new worktree's path relative to the bare repository and must not be a
    /// flag. Nothing is rolled
    /// back on failure. A failed fetch or merge still navigates to the worktree
    /// that was created.
    ///
    /// # Errors
    /// Returns an error if the listing fails or has no bare entry
    pub fn add(&self, path_spec: &[String]) -> Result<Outcome, WtError> {
        let Some(relative_path) = path_spec.first() else {
            self.reporter.error("No worktree path given");
            return Ok(Outcome::Failed);
        };
        if relative_path.starts_with('-') {
            self.reporter.error(&format!(
                "The worktree path must come first (got '{relative_path}')"
            ));
            return Ok(Outcome::Failed);
        }

        let bare_root = self.bare_root()?;

        if let Err(e) = self.vcs.add_worktree(&bare_root, path_spec) {
            self.reporter
                .error(&format!("Failed to add {relative_path} worktree: {e}"));
            return Ok(Outcome::Failed);
        }

        let worktree_path = bare_root.join(relative_path);

        if !self.config.sync_on_add {
            return Ok(Outcome::Navigate(worktree_path));
        }

        let Some(default_branch) = self.vcs.default_branch(&bare_root, &self.config.remote) else {
            self.reporter.debug(&format!(
                "No default branch for remote '{}', skipping sync",
                self.config.remote
            ));
            return Ok(Outcome::Navigate(worktree_path));
        };

        self.reporter.info("Fetching changes");
        if let Err(e) = self.vcs.fetch_all(&worktree_path) {
            self.reporter
                .error(&format!("Failed to sync {relative_path} worktree: {e}"));
            return Ok(Outcome::Navigate(worktree_path));
        }

        let merge_ref = self.config.merge_ref(&default_branch);
        self.reporter.info(&format!("Merging with {merge_ref}"));
        if let Err(e) = self.vcs.merge(&worktree_path, &merge_ref) {
            self.reporter
                .error(&format!("Failed to sync {relative_path} worktree: {e}"));
        }

        Ok(Outcome::Navigate(worktree_path))
    }
}
