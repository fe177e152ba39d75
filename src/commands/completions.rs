use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Write the completion script for `shell` to `out`
pub fn write_completions(shell: Shell, cli: &mut Command, out: &mut dyn Write) {
    generate(shell, cli, "dl", out);
}

/// Generate shell completions for the specified shell
pub fn execute(shell: Shell, cli: &mut Command) -> Result<()> {
    write_completions(shell, cli, &mut io::stdout());
    Ok(())
}
