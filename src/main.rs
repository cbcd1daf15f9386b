//! The Skal interpreter CLI.
//!
//! This binary provides the `tokenize`, `parse`, `evaluate`, and `run`
//! commands and delegates pipeline orchestration to the driver module.

use clap::{Parser, Subcommand};
use clap::error::ErrorKind;

mod driver;

/// Command-line interface for the Skal interpreter.
#[derive(Parser)]
#[command(name = "skal")]
#[command(about = "The Skal programming language", long_about = None)]
struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a source file, one per line.
    Tokenize {
        /// The source file to tokenize (e.g., `program.skal`).
        file: String,
    },
    /// Parse a single expression and print its s-expression form.
    Parse {
        /// The source file to parse.
        file: String,
    },
    /// Evaluate a single expression and print the result.
    Evaluate {
        /// The source file to evaluate.
        file: String,
    },
    /// Execute a program.
    Run {
        /// The source file to run.
        file: String,
    },
}

/// Entry point for the Skal interpreter.
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // `--help` and `--version` are not usage errors.
            let code = match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    let exit_code = match cli.command {
        Commands::Tokenize { file } => driver::tokenize(&file),
        Commands::Parse { file } => driver::parse(&file),
        Commands::Evaluate { file } => driver::evaluate(&file),
        Commands::Run { file } => driver::run(&file),
    };
    std::process::exit(exit_code);
}
