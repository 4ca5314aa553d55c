use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueHint};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wt::Result;
use wt::commands::init::{self, Shell};
use wt::commands::{Lifecycle, Outcome};
use wt::config::WtConfig;
use wt::error::WtError;
use wt::git::{self, GitCli};
use wt::report::TracingReporter;
use wt::selection::FuzzySelectionProvider;

#[derive(Parser)]
#[command(name = "wt-bin")]
#[command(about = "Manage git worktrees hanging off a bare repository")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    /// Defaults to `switch` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all worktrees
    List,
    /// Go to the bare repository
    Bare,
    /// Add a new worktree
    Add {
        /// Path (relative to the bare repository) first, then any further `git worktree add` arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_hint = ValueHint::Other
        )]
        path: Vec<String>,
    },
    /// Remove worktree(s)
    Remove {
        /// Remove all worktrees
        #[arg(long)]
        all: bool,
        /// Force removing worktrees with modified or untracked files
        #[arg(long, env = "WT_FORCE")]
        force: bool,
    },
    /// Pick a worktree to go to
    Switch,
    /// Generate shell integration for directory navigation
    Init {
        /// Shell to generate integration for
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("WT_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli.command.unwrap_or(Commands::Switch)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            let code = e.downcast_ref::<WtError>().map_or(1, WtError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    // These don't need a repository
    match command {
        Commands::Init { shell } => {
            print!("{}", init::shell_integration(shell));
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            init::generate_completions(shell, &mut cmd);
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let cwd = std::env::current_dir()?;
    let git_cli = GitCli::locate()?;
    git::ensure_repository(&cwd)?;
    let config = WtConfig::load()?;
    let selector = FuzzySelectionProvider;
    let reporter = TracingReporter;

    let lifecycle = Lifecycle::new(&git_cli, &selector, &reporter, &config, cwd);

    let outcome = match command {
        Commands::List => {
            eprint!("{}", lifecycle.list()?);
            Outcome::NoOp
        }
        Commands::Bare => lifecycle.bare()?,
        Commands::Add { path } => lifecycle.add(&path)?,
        Commands::Remove { all, force } => lifecycle.remove(all, force)?,
        Commands::Switch => lifecycle.switch()?,
        Commands::Init { .. } | Commands::Completions { .. } => Outcome::NoOp,
    };

    match outcome {
        Outcome::Navigate(path) => {
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NoOp => Ok(ExitCode::SUCCESS),
        Outcome::Failed => Ok(ExitCode::FAILURE),
    }
}
