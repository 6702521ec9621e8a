//! `adlist --completions <shell>`.

use crate::cli::Cli;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

pub fn run_completions<O: Write>(shell: Shell, out: &mut O) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "adlist", out);
}
