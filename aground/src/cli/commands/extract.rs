//! Extract command - one-shot event extraction from a single text.

use clap::Parser;
use std::time::Instant;

use super::super::output::{color, print_linguistic_features, print_result};
use super::super::parser::{MatcherMode, OutputFormat};
use super::super::utils::{build_extractor, get_input_text};

/// Extract event information from text.
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Input text to process
    #[arg(short, long)]
    pub text: Option<String>,

    /// Read input from file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Argument-matching strategy
    #[arg(short, long, default_value = "keyword")]
    pub matcher: MatcherMode,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Include trigger offsets in JSON output
    #[arg(long)]
    pub positions: bool,

    /// Also print the linguistic-features view
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Positional text argument
    #[arg(trailing_var_arg = true)]
    pub positional: Vec<String>,
}

/// Run one extraction over the resolved input text.
pub fn run(args: ExtractArgs) -> Result<(), String> {
    let text = get_input_text(&args.text, args.file.as_deref(), &args.positional)?;
    let extractor = build_extractor(args.matcher)?;

    let start = Instant::now();
    let result = extractor.extract(&text);
    let elapsed = start.elapsed();

    match args.format {
        OutputFormat::Json => {
            let value = if args.positions {
                result.to_json_with_positions()
            } else {
                result.to_json()
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            );
        }
        OutputFormat::Human => {
            if !args.quiet {
                println!(
                    "{} extracted {} triggers in {:.1}ms (type: {}, matcher: {})",
                    color("32", "ok:"),
                    result.triggers.len(),
                    elapsed.as_secs_f64() * 1000.0,
                    result.event_type,
                    extractor.matcher_kind().as_str(),
                );
            }
            print_result(&result, args.quiet);
            if args.verbose {
                if let Some(doc) = extractor.analyze(&text) {
                    print_linguistic_features(&doc);
                }
            }
        }
    }

    Ok(())
}
