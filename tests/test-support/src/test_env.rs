#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity

use anyhow::{Context, Result};
use assert_fs::TempDir;
use assert_fs::prelude::*;

use std::path::{Path, PathBuf};
use std::process::Command;

/// A bare clone of a throwaway repository, the layout `wt` manages:
///
/// ```text
/// <tmp>/origin_repo/   regular repository with one commit on `main`
/// <tmp>/project/       `git clone --bare origin_repo project`
/// ```
pub struct BareRepoEnvironment {
    pub origin_dir: assert_fs::fixture::ChildPath,
    pub bare_dir: assert_fs::fixture::ChildPath,
    pub config_file: assert_fs::fixture::ChildPath,
    _temp_dir: TempDir, // Keep temp_dir private to ensure cleanup, but don't expose it
}

impl BareRepoEnvironment {
    /// Creates the origin repository and its bare clone
    ///
    /// # Errors
    /// Returns an error if:
    /// - Failed to create temporary directory
    /// - Any git command fails
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
        let origin_dir = temp_dir.child("origin_repo");
        let bare_dir = temp_dir.child("project");
        let config_file = temp_dir.child("wt-config.toml");

        origin_dir.create_dir_all()?;

        Self::run_git_command(origin_dir.path(), &["init"])?;
        Self::run_git_command(origin_dir.path(), &["config", "user.name", "Test User"])?;
        Self::run_git_command(origin_dir.path(), &["config", "user.email", "test@example.com"])?;

        origin_dir.child("README.md").write_str("# Test Repo")?;
        Self::run_git_command(origin_dir.path(), &["add", "."])?;
        Self::run_git_command(origin_dir.path(), &["commit", "-m", "Initial commit"])?;

        // Ensure we have a main branch (some git versions default to 'master')
        Self::run_git_command(origin_dir.path(), &["branch", "-M", "main"])?;

        Self::run_git_command(
            temp_dir.path(),
            &["clone", "--bare", "origin_repo", "project"],
        )?;

        Ok(Self {
            origin_dir,
            bare_dir,
            config_file,
            _temp_dir: temp_dir,
        })
    }

    /// Run a git command in `dir`, returning its stdout
    ///
    /// # Errors
    /// Returns an error if git cannot be spawned or exits unsuccessfully
    pub fn run_git_command(dir: &Path, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .output()
            .context("Failed to execute git command")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Git command {:?} failed: {}", args, stderr);
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Adds a worktree directly with git, bypassing `wt-bin`
    ///
    /// # Errors
    /// Returns an error if `git worktree add` fails
    pub fn add_worktree_with_git(&self, name: &str) -> Result<assert_fs::fixture::ChildPath> {
        Self::run_git_command(self.bare_dir.path(), &["worktree", "add", name])?;
        Ok(self.worktree(name))
    }

    /// Gives the bare clone's `origin` remote a fetch refspec, so fetches create
    /// `refs/remotes/origin/*` the way a regular clone does
    ///
    /// # Errors
    /// Returns an error if any git command fails
    pub fn track_remote_branches(&self) -> Result<()> {
        Self::run_git_command(
            self.bare_dir.path(),
            &["config", "remote.origin.fetch", "+refs/heads/*:refs/remotes/origin/*"],
        )?;
        Self::run_git_command(self.bare_dir.path(), &["fetch", "origin"])?;
        Ok(())
    }

    /// Commits a new file on the origin's `main`, after the bare clone was made
    ///
    /// # Errors
    /// Returns an error if writing the file or any git command fails
    pub fn commit_to_origin(&self, file: &str, content: &str) -> Result<()> {
        self.origin_dir.child(file).write_str(content)?;
        Self::run_git_command(self.origin_dir.path(), &["add", file])?;
        Self::run_git_command(self.origin_dir.path(), &["commit", "-m", &format!("Add {file}")])?;
        Ok(())
    }

    /// Path of a (possibly not yet existing) worktree under the bare repository
    pub fn worktree(&self, name: &str) -> assert_fs::fixture::ChildPath {
        self.bare_dir.child(name)
    }

    /// Execute a CLI command from the bare repository
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command(&self, args: &[&str]) -> Result<assert_cmd::Command> {
        self.run_command_in(self.bare_dir.path(), args)
    }

    /// Execute a CLI command from `dir`, isolated from the user's configuration
    ///
    /// # Errors
    /// Returns an error if the command setup fails
    pub fn run_command_in(&self, dir: &Path, args: &[&str]) -> Result<assert_cmd::Command> {
        let mut cmd =
            assert_cmd::Command::cargo_bin("wt-bin").context("Failed to find wt-bin binary")?;

        cmd.current_dir(dir)
            .env("WT_CONFIG", self.config_file.path())
            .env("WT_LOG", "info")
            .env_remove("WT_FORCE");

        cmd.args(args);
        Ok(cmd)
    }

    /// Writes the `wt` configuration file used by [`Self::run_command`]
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn write_config(&self, content: &str) -> Result<()> {
        self.config_file.write_str(content)?;
        Ok(())
    }

    /// Canonical form of a path, so output from git can be compared on systems
    /// where the temp directory sits behind a symlink
    pub fn canonical(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use predicates::prelude::*;

    #[test]
    fn test_bare_repo_environment_creation() -> Result<()> {
        let env = BareRepoEnvironment::new()?;

        env.origin_dir.child(".git").assert(predicate::path::exists());
        env.bare_dir.child("HEAD").assert(predicate::path::exists());
        env.config_file.assert(predicate::path::missing());

        let listing = BareRepoEnvironment::run_git_command(env.bare_dir.path(), &["worktree", "list"])?;
        assert!(listing.contains("(bare)"));

        Ok(())
    }

    #[test]
    fn test_add_worktree_with_git() -> Result<()> {
        let env = BareRepoEnvironment::new()?;

        let worktree = env.add_worktree_with_git("scratch")?;
        worktree.assert(predicate::path::is_dir());
        worktree.child("README.md").assert(predicate::path::exists());

        Ok(())
    }
}
