use inquire::{InquireError, Select};
use std::cell::{Cell, RefCell};

use crate::error::WtError;
use crate::listing::WorktreeRecord;
use crate::report::Reporter;

/// Result of asking the user to pick a worktree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(WorktreeRecord),
    /// The user backed out of the prompt
    Cancelled,
    /// There was nothing to choose from, the prompt was never shown
    Empty,
}

/// Trait for providing interactive selection functionality
/// This allows us to abstract away the interactive prompts for testing
pub trait SelectionProvider {
    /// Present a fuzzy selection menu and return the chosen line.
    ///
    /// `Ok(None)` means the user cancelled.
    ///
    /// # Errors
    /// Returns an error if the prompt cannot be shown (e.g. no terminal)
    fn select(&self, prompt: &str, options: Vec<String>) -> Result<Option<String>, WtError>;
}

/// Real implementation using inquire's fuzzy-filtered `Select`
pub struct FuzzySelectionProvider;

impl SelectionProvider for FuzzySelectionProvider {
    fn select(&self, prompt: &str, options: Vec<String>) -> Result<Option<String>, WtError> {
        match Select::new(prompt, options)
            .with_page_size(10)
            .with_vim_mode(true)
            .prompt()
        {
            Ok(choice) => Ok(Some(choice)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(WtError::Prompt(e.to_string())),
        }
    }
}

/// A scripted answer for [`ScriptedSelectionProvider`]
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    /// Pick the first option containing this text
    Pick(String),
    Cancel,
}

/// Mock implementation for testing that answers from a script
pub struct ScriptedSelectionProvider {
    answer: ScriptedAnswer,
    calls: Cell<usize>,
    last_options: RefCell<Vec<String>>,
}

impl ScriptedSelectionProvider {
    pub fn pick(needle: impl Into<String>) -> Self {
        Self::new(ScriptedAnswer::Pick(needle.into()))
    }

    #[must_use]
    pub fn cancel() -> Self {
        Self::new(ScriptedAnswer::Cancel)
    }

    fn new(answer: ScriptedAnswer) -> Self {
        Self {
            answer,
            calls: Cell::new(0),
            last_options: RefCell::new(Vec::new()),
        }
    }

    /// How many times the prompt was shown
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    #[must_use]
    pub fn last_options(&self) -> Vec<String> {
        self.last_options.borrow().clone()
    }
}

impl SelectionProvider for ScriptedSelectionProvider {
    fn select(&self, _prompt: &str, options: Vec<String>) -> Result<Option<String>, WtError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_options.borrow_mut() = options.clone();

        match &self.answer {
            ScriptedAnswer::Cancel => Ok(None),
            ScriptedAnswer::Pick(needle) => options
                .into_iter()
                .find(|option| option.contains(needle.as_str()))
                .map(Some)
                .ok_or_else(|| {
                    WtError::Prompt(format!("Scripted answer '{needle}' not found in options"))
                }),
        }
    }
}

/// Asks the user to pick one of `records`, skipping the bare one when `exclude_bare` is set.
///
/// An empty candidate list is reported and yields [`Selection::Empty`] without
/// showing the prompt.
///
/// # Errors
/// Returns an error if the prompt itself fails
pub fn select_worktree(
    records: &[WorktreeRecord],
    exclude_bare: bool,
    prompt: &str,
    provider: &dyn SelectionProvider,
    reporter: &dyn Reporter,
) -> Result<Selection, WtError> {
    let options: Vec<String> = records
        .iter()
        .filter(|record| !(exclude_bare && record.is_bare))
        .map(|record| record.line().to_string())
        .collect();

    if options.is_empty() {
        reporter.error(&WtError::NoWorktreesAvailable.to_string());
        return Ok(Selection::Empty);
    }

    let Some(choice) = provider.select(prompt, options)? else {
        return Ok(Selection::Cancelled);
    };

    // Same path rule as the listing parser: first whitespace token
    Ok(WorktreeRecord::parse_line(&choice).map_or(Selection::Cancelled, Selection::Chosen))
}
