//! Shared helpers for CLI commands.

use std::fs;
use std::io::Read;

use crate::extractor::GroundingExtractor;
use crate::heuristic::HeuristicAnalyzer;

use super::parser::MatcherMode;

/// Resolve input text from `--text`, `--file`, positional args, or stdin
/// (in that order).
pub fn get_input_text(
    text: &Option<String>,
    file: Option<&str>,
    positional: &[String],
) -> Result<String, String> {
    if let Some(text) = text {
        return Ok(text.clone());
    }
    if let Some(path) = file {
        return fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"));
    }
    if !positional.is_empty() {
        return Ok(positional.join(" "));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read stdin: {e}"))?;
    if buffer.trim().is_empty() {
        return Err("No input text. Pass text, --text, --file, or pipe via stdin.".to_string());
    }
    Ok(buffer)
}

/// Build an extractor over the built-in heuristic analyzer.
pub fn build_extractor(mode: MatcherMode) -> Result<GroundingExtractor, String> {
    GroundingExtractor::with_matcher_kind(Box::new(HeuristicAnalyzer::new()), mode.kind())
        .map_err(|e| format!("Failed to build extractor: {e}"))
}
