use git2::{Repository, RepositoryOpenFlags};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::WtError;
use crate::traits::VersionControl;

/// Runs git operations by spawning the `git` executable
pub struct GitCli {
    binary: PathBuf,
}

impl GitCli {
    /// Resolves the `git` executable on `PATH`
    ///
    /// # Errors
    /// Returns [`WtError::GitNotFound`] if no `git` executable can be found
    pub fn locate() -> Result<Self, WtError> {
        let binary = which::which("git")?;
        tracing::debug!("Using git at {}", binary.display());
        Ok(Self { binary })
    }

    /// Runs git with `args` in `cwd` and returns its stdout.
    ///
    /// `step` names the operation in error messages.
    fn run(&self, step: &str, cwd: &Path, args: &[&str]) -> Result<String, WtError> {
        tracing::debug!("git {} (in {})", args.join(" "), cwd.display());

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| WtError::Subprocess {
                step: step.to_string(),
                cwd: cwd.to_path_buf(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(WtError::Subprocess {
                step: step.to_string(),
                cwd: cwd.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Environment variable git uses to stop the upward repository search
pub const CEILING_DIRECTORIES_ENV_VAR: &str = "GIT_CEILING_DIRECTORIES";

/// Checks that `path` is inside a git repository (bare or linked worktree).
///
/// The search walks up from `path` and stops at `GIT_CEILING_DIRECTORIES`,
/// as the `git` executable does.
///
/// # Errors
/// Returns [`WtError::NotARepository`] if no repository can be discovered from `path`
pub fn ensure_repository(path: &Path) -> Result<(), WtError> {
    let ceilings: Vec<PathBuf> = std::env::var_os(CEILING_DIRECTORIES_ENV_VAR)
        .map(|dirs| std::env::split_paths(&dirs).collect())
        .unwrap_or_default();

    match Repository::open_ext(path, RepositoryOpenFlags::empty(), &ceilings) {
        Ok(repo) => {
            tracing::debug!("Discovered repository at {}", repo.path().display());
            Ok(())
        }
        Err(_) => Err(WtError::NotARepository {
            path: path.to_path_buf(),
        }),
    }
}

/// Extracts the branch name from `git remote show <remote>` output
#[must_use]
pub fn parse_head_branch(remote_show: &str) -> Option<String> {
    remote_show
        .lines()
        .filter_map(|line| line.trim().strip_prefix("HEAD branch:"))
        .map(str::trim)
        .find(|name| !name.is_empty() && *name != "(unknown)")
        .map(ToString::to_string)
}

impl VersionControl for GitCli {
    fn list_worktrees(&self, cwd: &Path) -> Result<String, WtError> {
        self.run("worktree list", cwd, &["worktree", "list"])
    }

    fn add_worktree(&self, cwd: &Path, args: &[String]) -> Result<(), WtError> {
        let mut full_args = vec!["worktree", "add"];
        full_args.extend(args.iter().map(String::as_str));
        self.run("worktree add", cwd, &full_args)?;
        Ok(())
    }

    fn remove_worktree(&self, cwd: &Path, worktree: &Path, force: bool) -> Result<(), WtError> {
        let worktree = worktree.to_string_lossy().to_string();
        let mut args = vec!["worktree", "remove", worktree.as_str()];
        if force {
            args.push("--force");
        }
        self.run("worktree remove", cwd, &args)?;
        Ok(())
    }

    fn fetch_all(&self, cwd: &Path) -> Result<(), WtError> {
        self.run("fetch", cwd, &["fetch", "--all"])?;
        Ok(())
    }

    fn merge(&self, cwd: &Path, branch_ref: &str) -> Result<(), WtError> {
        self.run("merge", cwd, &["merge", branch_ref])?;
        Ok(())
    }

    fn default_branch(&self, cwd: &Path, remote: &str) -> Option<String> {
        match self.run("remote show", cwd, &["remote", "show", remote]) {
            Ok(output) => parse_head_branch(&output),
            Err(e) => {
                tracing::debug!("Default branch unavailable: {e}");
                None
            }
        }
    }
}
