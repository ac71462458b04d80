//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::extractor::MatcherKind;

use super::commands;

/// Ship-grounding incident event extraction CLI.
#[derive(Parser)]
#[command(name = "aground")]
#[command(
    author,
    version,
    about = "Extract grounding-incident events from news text: triggers, types, arguments",
    long_about = r#"
aground - ship-grounding incident event extraction

CAPABILITIES:
  • Trigger detection - whole-word dictionary matching ("ran aground", "struck", ...)
  • Event typing - grounding / collision / stranding / accident by trigger counts
  • Argument extraction - vessel, location, cause, time, damage, response, person
    via keyword or token-pattern matching, a dependency walk, and entity mapping

MATCHERS:
  • keyword  - literal whole-word matching over raw text (works without analysis)
  • pattern  - token-sequence patterns over the analyzed document

EXAMPLES:
  aground "The ferry struck rocks near the harbor."
  aground extract -t "MV Ever Given ran aground in the Suez Canal." --format json
  aground repl
  aground demo
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text to extract from (shorthand for `aground extract`)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract event information from text
    #[command(visible_alias = "x")]
    Extract(commands::ExtractArgs),

    /// Interactive read-loop: one extraction per input line
    #[command(visible_alias = "r")]
    Repl(commands::ReplArgs),

    /// Run the bundled sample incident passages
    #[command(visible_alias = "d")]
    Demo(commands::DemoArgs),

    /// Show version, analyzer and lexicon info
    #[command(visible_alias = "i")]
    Info,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Human,
    /// JSON object: text, trigger_words, event_type, arguments
    Json,
}

/// Argument-matching strategy selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum MatcherMode {
    /// Literal whole-word keyword matching over raw text
    #[default]
    Keyword,
    /// Token-sequence patterns over the analyzed document
    Pattern,
}

impl MatcherMode {
    /// The library-side matcher kind.
    #[must_use]
    pub fn kind(self) -> MatcherKind {
        match self {
            MatcherMode::Keyword => MatcherKind::Keyword,
            MatcherMode::Pattern => MatcherKind::TokenPattern,
        }
    }
}
