#![deny(missing_docs)]

//! # Vue Compgen CLI
//!
//! Command line interface for the component scaffolder.
//!
//! Supported Commands:
//! - `new`: Creates a Vue component (SFC, style, test) and optionally wires
//!   it into the documentation registries.

use clap::{Parser, Subcommand};
use compgen_core::AppResult;

mod new;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Vue component generator")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Creates a Vue component with the standard structure.
    New(new::NewArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::New(args) => new::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
