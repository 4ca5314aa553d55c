use std::path::PathBuf;

use thiserror::Error;

/// Failures the worktree lifecycle can run into.
///
/// Only [`WtError::NotARepository`] terminates the process on its own; the
/// lifecycle turns subprocess and selection failures into outcomes.
#[derive(Debug, Error)]
pub enum WtError {
    #[error("Not a git repository: {}", path.display())]
    NotARepository { path: PathBuf },

    #[error("No bare worktree found")]
    NoBareWorktree,

    #[error("No worktrees available.")]
    NoWorktreesAvailable,

    #[error("git {step} failed in {}: {stderr}", cwd.display())]
    Subprocess {
        step: String,
        cwd: PathBuf,
        stderr: String,
    },

    #[error("Could not locate the git executable: {0}")]
    GitNotFound(#[from] which::Error),

    #[error("Selection prompt failed: {0}")]
    Prompt(String),
}

impl WtError {
    /// Process exit code used by the dispatcher when this error is fatal
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            WtError::NotARepository { .. } => 128,
            _ => 1,
        }
    }
}
