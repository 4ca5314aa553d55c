//! # wt
//!
//! A command-line assistant for repositories laid out as a bare clone with
//! linked worktrees beneath it:
//!
//! ```text
//! project/            <- bare repository ("bare root")
//! project/main/       <- worktree
//! project/feature-x/  <- worktree
//! ```
//!
//! `wt-bin` finds the bare root, lists worktrees, adds new ones (synced with the
//! remote's default branch), removes one or all of them and jumps between them
//! with a fuzzy prompt. The directory to move into is printed on stdout so a
//! shell function (see `wt-bin init`) can `cd` into it; everything else goes to
//! stderr.
//!
//! ## Quick Start
//!
//! ```bash
//! eval "$(wt-bin init bash)"
//!
//! wt add feature-x      # create, fetch, merge the default branch, cd in
//! wt                    # fuzzy-pick a worktree and cd into it
//! wt remove             # pick a worktree to remove
//! wt remove --all       # remove every worktree, end up in the bare root
//! wt bare               # cd to the bare root
//! ```
//!
//! ## Module Structure
//!
//! - [`listing`] - Parses `git worktree list` output and finds the bare root
//! - [`selection`] - Abstracts the interactive fuzzy prompt for testability
//! - [`commands`] - The worktree lifecycle, one command per file
//! - [`git`] - `git` subprocess wrapper and repository discovery
//! - [`traits`] - Defines the `VersionControl` trait the lifecycle runs against
//! - [`report`] - Injected progress/error reporting
//! - [`config`] - Handles the user's `config.toml`
//! - [`error`] - Error taxonomy

pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod listing;
pub mod report;
pub mod selection;
pub mod traits;

pub use anyhow::Result;
