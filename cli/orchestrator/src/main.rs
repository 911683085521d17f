//! Correlation CLI
//!
//! This binary is the command-line entry point for generating enum lookup
//! repositories outside of a build script.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;

use clap::Parser;
use correlation_cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: Failed to read current directory: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &cwd) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
