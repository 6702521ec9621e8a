//! CLI for adlist.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_completions, run_edit, run_list, run_man};

/// Exit status when neither `--add` nor `--remove` is given.
pub const USAGE_EXIT: u8 = 2;

const LONG_ABOUT: &str = "\
Enable and disable blocklist sources in Pi-hole's adlists.list.

Adding a URL uncomments it if a commented-out line for it exists, and appends \
it otherwise. Removing a URL comments out every active line that starts with \
it; lines are never deleted. URLs are matched literally and case-insensitively \
against the start of each line. After the list is saved, `pihole -g` is run to \
rebuild the block database and its output is printed.

Adds are applied before removes, each in the order given.";

/// Top-level CLI for adlist.
#[derive(Debug, Parser)]
#[command(name = "adlist", version)]
#[command(about = "Enable and disable Pi-hole blocklist sources", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Enable blocklist source URL(s).
    #[arg(short, long, value_name = "URL", num_args = 1..)]
    pub add: Vec<String>,

    /// Disable blocklist source URL(s) by commenting them out.
    #[arg(short, long, value_name = "URL", num_args = 1..)]
    pub remove: Vec<String>,

    /// List file to edit (default: /etc/pihole/adlists.list, or `list_path` from config).
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Save the list without running the reload command.
    #[arg(long)]
    pub no_reload: bool,

    /// Print every entry with its state and exit.
    #[arg(short, long, conflicts_with_all = ["add", "remove"])]
    pub list: bool,

    /// Print the full manual page (roff) and exit.
    #[arg(long, exclusive = true)]
    pub man: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    pub completions: Option<Shell>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Man,
    Completions(Shell),
    List,
    Edit,
    /// Nothing to do; print usage and fail.
    Usage,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.man {
            Action::Man
        } else if let Some(shell) = self.completions {
            Action::Completions(shell)
        } else if self.list {
            Action::List
        } else if self.add.is_empty() && self.remove.is_empty() {
            Action::Usage
        } else {
            Action::Edit
        }
    }

    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        tracing::debug!("parsed args: {:?}", cli);
        let status = cli.run(&mut io::stdout().lock(), &mut io::stderr().lock())?;
        Ok(ExitCode::from(status))
    }

    /// Dispatch on the parsed arguments and return the process exit status.
    pub fn run<O: Write, E: Write>(self, out: &mut O, err: &mut E) -> Result<u8> {
        match self.action() {
            Action::Man => run_man(out)?,
            Action::Completions(shell) => run_completions(shell, out),
            Action::List => run_list(self.file.as_deref(), out)?,
            Action::Edit => run_edit(self, out, err)?,
            Action::Usage => {
                write!(err, "{}", Cli::command().render_help())?;
                return Ok(USAGE_EXIT);
            }
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests;
