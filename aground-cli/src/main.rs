//! aground - ship-grounding incident event extraction CLI.
//!
//! Extracts trigger words, a coarse event type and semantic arguments
//! (vessel, location, cause, time, damage, response, person) from short
//! English news passages.
//!
//! # Usage
//!
//! ```bash
//! # One-shot extraction
//! aground "The ferry struck rocks near the harbor."
//!
//! # JSON output with trigger offsets
//! aground extract -t "MV Ever Given ran aground in the Suez Canal." --format json --positions
//!
//! # Interactive loop ('quit' to leave)
//! aground repl
//!
//! # Bundled sample passages
//! aground demo
//! ```

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use aground::cli::{commands, Cli, Commands, MatcherMode, OutputFormat};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Commands::Extract(args)) => commands::extract::run(args),
        Some(Commands::Repl(args)) => commands::repl::run(args),
        Some(Commands::Demo(args)) => commands::demo::run(args),
        Some(Commands::Info) => commands::info::run(),
        None => {
            if cli.text.is_empty() {
                // No subcommand, no text: show help
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                return ExitCode::SUCCESS;
            }
            // Bare text behaves as `aground extract <text>`
            commands::extract::run(commands::ExtractArgs {
                text: None,
                file: None,
                matcher: MatcherMode::default(),
                format: OutputFormat::default(),
                positions: false,
                verbose: false,
                quiet: false,
                positional: cli.text,
            })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
