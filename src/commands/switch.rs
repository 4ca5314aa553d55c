use super::{Lifecycle, Outcome};
use crate::error::WtError;
use crate::selection::Selection;

impl Lifecycle<'_> {
    /// Picks a worktree to jump to. Nothing in the repository changes.
    ///
    /// # Errors
    /// Returns an error if the listing fails or the prompt cannot be shown
    pub fn switch(&self) -> Result<Outcome, WtError> {
        let records = self.snapshot()?;
        match self.select(&records)? {
            Selection::Chosen(record) => {
                self.reporter
                    .info(&format!("Changing current worktree: {}", record.name()));
                Ok(Outcome::Navigate(record.path))
            }
            Selection::Cancelled | Selection::Empty => Ok(Outcome::NoOp),
        }
    }
}
