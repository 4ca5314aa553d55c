//! User configuration for `wt`.
//!
//! Loaded from `$WT_CONFIG` when set, otherwise from `<config dir>/wt/config.toml`
//! (e.g. `~/.config/wt/config.toml` on Linux). Every key is optional.
//!
//! ```toml
//! remote = "origin"
//! sync-on-add = true
//! merge-remote-tracking = false
//! prompt = "Select worktree > "
//!
//! [remove-all]
//! protected-branches = ["main", "release/*"]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::listing::WorktreeRecord;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV_VAR: &str = "WT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WtConfig {
    /// Remote whose HEAD branch new worktrees are synced with
    pub remote: String,
    /// Fetch and merge the default branch after `add`
    pub sync_on_add: bool,
    /// Merge `<remote>/<branch>` instead of the local `<branch>`.
    ///
    /// Only useful once the remote has a fetch refspec
    /// (`git config remote.origin.fetch '+refs/heads/*:refs/remotes/origin/*'`);
    /// `git clone --bare` leaves it unset, so there are no remote-tracking refs to merge.
    pub merge_remote_tracking: bool,
    /// Label of the fuzzy selection prompt
    pub prompt: String,
    pub remove_all: RemoveAllPolicy,
}

/// Which worktrees `remove --all` leaves alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RemoveAllPolicy {
    /// Glob patterns matched against each worktree's branch name
    pub protected_branches: Vec<String>,
}

impl Default for WtConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            sync_on_add: true,
            merge_remote_tracking: false,
            prompt: "Select worktree > ".to_string(),
            remove_all: RemoveAllPolicy::default(),
        }
    }
}

impl WtConfig {
    /// Loads the configuration from `$WT_CONFIG` or the user config directory.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Location of the config file, if one can be determined
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        dirs::config_dir().map(|dir| dir.join("wt").join("config.toml"))
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// is missing, blank or not valid TOML.
    ///
    /// # Errors
    /// Only returns an error if reading an existing file fails
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        match toml::from_str::<WtConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Invalid TOML in {}: {}. Using default configuration.",
                    path.display(),
                    e.message()
                );
                Ok(Self::default())
            }
        }
    }

    /// The ref merged into a freshly added worktree
    #[must_use]
    pub fn merge_ref(&self, default_branch: &str) -> String {
        if self.merge_remote_tracking {
            format!("{}/{}", self.remote, default_branch)
        } else {
            default_branch.to_string()
        }
    }
}

impl RemoveAllPolicy {
    /// Whether `remove --all` must skip this worktree
    #[must_use]
    pub fn protects(&self, record: &WorktreeRecord) -> bool {
        let Some(branch) = record.branch_name() else {
            return false;
        };

        self.protected_branches.iter().any(|pattern| {
            match glob::Pattern::new(pattern) {
                Ok(compiled) => compiled.matches(branch),
                Err(e) => {
                    tracing::warn!("Ignoring invalid protected-branches pattern '{pattern}': {e}");
                    false
                }
            }
        })
    }
}
