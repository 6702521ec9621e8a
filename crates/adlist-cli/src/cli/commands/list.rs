//! `adlist --list` – show every entry and whether it is enabled.

use super::resolve_config;
use adlist_core::list::AdList;
use adlist_core::storage;
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn run_list<O: Write>(file: Option<&Path>, out: &mut O) -> Result<()> {
    let cfg = resolve_config(file)?;
    let list = AdList::parse(&storage::load(&cfg.list_path)?);

    let mut entries = list.entries().peekable();
    if entries.peek().is_none() {
        writeln!(out, "No entries in {}.", cfg.list_path.display())?;
        return Ok(());
    }
    writeln!(out, "{:<10} {}", "STATE", "URL")?;
    for e in entries {
        let state = if e.enabled { "enabled" } else { "disabled" };
        writeln!(out, "{:<10} {}", state, e.url)?;
    }
    Ok(())
}
