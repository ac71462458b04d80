//! Repl command - interactive read-loop, one extraction per line.

use clap::Parser;
use std::io::{self, BufRead, Write};

use super::super::output::print_result;
use super::super::parser::{MatcherMode, OutputFormat};
use super::super::utils::build_extractor;

/// Interactive read-loop: one extraction per input line.
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Argument-matching strategy
    #[arg(short, long, default_value = "keyword")]
    pub matcher: MatcherMode,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Is `line` one of the termination words?
#[must_use]
pub fn is_quit(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// Run the interactive read-loop until a quit word or EOF.
pub fn run(args: ReplArgs) -> Result<(), String> {
    let extractor = build_extractor(args.matcher)?;

    println!("Enter an incident description ('quit' to exit):");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read stdin: {e}"))?;
        if read == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if is_quit(line) {
            break;
        }

        let result = extractor.extract(line);
        match args.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
            ),
            OutputFormat::Human => print_result(&result, false),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_words_are_case_insensitive() {
        for word in ["quit", "QUIT", "exit", "Exit", "q", "Q"] {
            assert!(is_quit(word), "{word} should terminate");
        }
        assert!(!is_quit("quit now"));
        assert!(!is_quit("aground"));
    }
}
