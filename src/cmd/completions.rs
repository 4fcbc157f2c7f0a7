//! Completions command implementation
//!
//! Handles the `snowwiz completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

const BIN_NAME: &str = "snowwiz";

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) {
    generate(shell, cmd, BIN_NAME, out);
}

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// snowwiz completions bash > /etc/bash_completion.d/snowwiz
///
/// # Zsh
/// snowwiz completions zsh > ~/.zfunc/_snowwiz
///
/// # Fish
/// snowwiz completions fish > ~/.config/fish/completions/snowwiz.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_command() -> Command {
        Command::new(BIN_NAME)
            .subcommand(Command::new("recommend").about("Recommend warehouses"))
            .subcommand(Command::new("samples").about("List sample queries"))
    }

    #[test]
    fn test_write_completions_mentions_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut buf = Vec::new();
            write_completions(shell, &mut demo_command(), &mut buf);
            let script = String::from_utf8(buf).unwrap();
            assert!(script.contains("recommend"), "{:?} script lacks subcommand", shell);
            assert!(script.contains("samples"));
        }
    }
}
