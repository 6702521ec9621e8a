//! `adlist --man` – render the manual page from the clap definition.

use crate::cli::Cli;
use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::Write;

pub fn run_man<O: Write>(out: &mut O) -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    man.render(out).context("writing manual page")?;
    Ok(())
}
