//! Refresh trigger: runs the blocking service's reload command.
//!
//! The command is an external collaborator. `Reloader` is the seam; the CLI
//! uses `CommandReloader`, tests substitute their own implementation.

use crate::config::ReloadConfig;
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// Captured output of a reload run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
}

impl ReloadOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait Reloader {
    /// Run the reload to completion and return its captured output.
    ///
    /// A non-zero exit is not an error; only failing to start the command is.
    fn reload(&self) -> Result<ReloadOutput>;
}

/// Runs a fixed program with fixed arguments, e.g. `pihole -g`.
#[derive(Debug, Clone)]
pub struct CommandReloader {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandReloader {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(cfg: &ReloadConfig) -> Self {
        Self::new(cfg.program.clone(), cfg.args.clone())
    }
}

impl Reloader for CommandReloader {
    fn reload(&self) -> Result<ReloadOutput> {
        tracing::info!(program = %self.program.display(), args = ?self.args, "running reload");
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| Error::Reload {
                program: self.program.clone(),
                source,
            })?;

        let out = ReloadOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        };
        if out.success() {
            tracing::debug!("reload finished");
        } else {
            tracing::warn!(code = ?out.code, "reload command exited unsuccessfully");
        }
        Ok(out)
    }
}
