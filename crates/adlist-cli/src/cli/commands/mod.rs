//! CLI command handlers, one per file.

mod completions;
mod edit;
mod list;
mod man;

pub use completions::run_completions;
pub use edit::{print_outcome, run_edit};
pub use list::run_list;
pub use man::run_man;

use adlist_core::config::{self, AdlistConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Load the config file and apply the `--file` override.
fn resolve_config(file: Option<&Path>) -> Result<AdlistConfig> {
    let mut cfg = config::load_or_default().context("loading config")?;
    if let Some(path) = file {
        cfg.list_path = path.to_path_buf();
    }
    tracing::debug!("resolved config: {:?}", cfg);
    Ok(cfg)
}
