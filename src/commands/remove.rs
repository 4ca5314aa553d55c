use std::path::Path;

use super::{Lifecycle, Outcome};
use crate::error::WtError;
use crate::listing::{WorktreeRecord, resolve_bare_root};
use crate::selection::Selection;

impl Lifecycle<'_> {
    /// Removes either every linked worktree (`all`) or one picked interactively.
    ///
    /// # Errors
    /// Returns an error if the listing fails, has no bare entry, or the
    /// selection prompt cannot be shown
    pub fn remove(&self, all: bool, force: bool) -> Result<Outcome, WtError> {
        let records = self.snapshot()?;
        let bare_root = resolve_bare_root(&records)?;

        if all {
            Ok(self.remove_all(&records, bare_root, force))
        } else {
            self.remove_selected(&records, bare_root, force)
        }
    }

    /// Best effort: a failed removal is reported and the rest still run
    fn remove_all(&self, records: &[WorktreeRecord], bare_root: &Path, force: bool) -> Outcome {
        for record in records.iter().filter(|record| !record.is_bare) {
            if self.config.remove_all.protects(record) {
                self.reporter.info(&format!(
                    "Skipping protected worktree {}",
                    record.path.display()
                ));
                continue;
            }

            self.reporter
                .info(&format!("Removing {}...", record.path.display()));
            if let Err(e) = self.vcs.remove_worktree(bare_root, &record.path, force) {
                self.reporter.error(&format!(
                    "Failed to remove {} worktree: {e}",
                    record.path.display()
                ));
            }
        }

        Outcome::Navigate(bare_root.to_path_buf())
    }

    fn remove_selected(
        &self,
        records: &[WorktreeRecord],
        bare_root: &Path,
        force: bool,
    ) -> Result<Outcome, WtError> {
        let target = match self.select(records)? {
            Selection::Chosen(record) => record,
            Selection::Cancelled | Selection::Empty => return Ok(Outcome::NoOp),
        };

        self.reporter
            .info(&format!("Removing worktree: {}", target.path.display()));
        if let Err(e) = self.vcs.remove_worktree(bare_root, &target.path, force) {
            self.reporter.error(&format!(
                "Failed to remove {} worktree: {e}",
                target.path.display()
            ));
            return Ok(Outcome::NoOp);
        }

        // Standing inside the removed worktree leaves nowhere to stay
        if target.path.file_name() == self.cwd.file_name() {
            Ok(Outcome::Navigate(bare_root.to_path_buf()))
        } else {
            Ok(Outcome::Navigate(self.cwd.clone()))
        }
    }
}
