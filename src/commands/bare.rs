use super::{Lifecycle, Outcome};
use crate::error::WtError;

impl Lifecycle<'_> {
    /// Navigates to the bare repository
    ///
    /// # Errors
    /// Returns [`WtError::NoBareWorktree`] if the listing has no bare entry
    pub fn bare(&self) -> Result<Outcome, WtError> {
        let bare_root = self.bare_root()?;
        self.reporter.info(&format!(
            "Changing to bare directory: {}",
            bare_root.display()
        ));
        Ok(Outcome::Navigate(bare_root))
    }
}
