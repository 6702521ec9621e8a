//! `adlist -a <url> -r <url>` – edit the list, save it, and reload.

use super::resolve_config;
use crate::cli::Cli;
use adlist_core::apply::{self, EditRequest, Outcome};
use adlist_core::reload::CommandReloader;
use anyhow::Result;
use std::io::Write;

pub fn run_edit<O: Write, E: Write>(cli: Cli, out: &mut O, err: &mut E) -> Result<()> {
    let cfg = resolve_config(cli.file.as_deref())?;
    let request = EditRequest {
        add: cli.add,
        remove: cli.remove,
        no_reload: cli.no_reload,
    };
    let reloader = CommandReloader::from_config(&cfg.reload);

    let outcome = apply::run(&cfg, &request, &reloader)?;
    print_outcome(out, err, &outcome)
}

/// One line per edited URL, then the reload's stdout; its stderr goes to `err`.
pub fn print_outcome<O: Write, E: Write>(out: &mut O, err: &mut E, outcome: &Outcome) -> Result<()> {
    for edit in &outcome.edits {
        writeln!(out, "{:<10} {}", edit.change.to_string(), edit.url)?;
    }
    if let Some(reload) = &outcome.reload {
        write!(out, "{}", reload.stdout)?;
        write!(err, "{}", reload.stderr)?;
    }
    Ok(())
}
