//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Name the completion scripts are generated for.
pub const BIN_NAME: &str = "unitconv";

/// Generate a shell completion script for the `unitconv` binary.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, BIN_NAME, out);
}
