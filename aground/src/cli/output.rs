//! Output formatting utilities for CLI commands.

use is_terminal::IsTerminal;
use std::io;

use aground_core::{AnalyzedDocument, ArgumentRole, DepLabel, ExtractionResult, PosTag};

/// Log info message to stderr (respects quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{msg}");
    }
}

/// Colorize text with ANSI escape codes (only if stdout is a terminal).
#[must_use]
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Get color code for an argument role.
#[must_use]
pub fn role_color(role: ArgumentRole) -> &'static str {
    match role {
        ArgumentRole::Vessel => "1;34",
        ArgumentRole::Location => "1;33",
        ArgumentRole::Cause => "1;31",
        ArgumentRole::Time => "1;35",
        ArgumentRole::Damage => "31",
        ArgumentRole::Response => "1;32",
        ArgumentRole::Person => "1;36",
    }
}

/// Echo text truncated at 200 characters, matching the report layout.
#[must_use]
pub fn truncate_text(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() > 200 {
        let cut: String = flat.chars().take(200).collect();
        format!("{cut}...")
    } else {
        flat
    }
}

/// Print a human-readable extraction report.
pub fn print_result(result: &ExtractionResult, quiet: bool) {
    if quiet {
        println!(
            "{}\t{}",
            result.event_type,
            result.trigger_words().join(",")
        );
        return;
    }

    println!();
    println!("  {:<9}: {}", "text", truncate_text(&result.text));
    println!(
        "  {:<9}: {}",
        "type",
        color("1;32", result.event_type.as_str())
    );
    if result.triggers.is_empty() {
        println!("  {:<9}: none found", "triggers");
    } else {
        let rendered: Vec<String> = result
            .triggers
            .iter()
            .map(|t| format!("{} [{},{})", t.keyword, t.start, t.end))
            .collect();
        println!("  {:<9}: {}", "triggers", rendered.join("  "));
    }
    println!("  arguments:");
    let mut any = false;
    for (role, values) in result.arguments.iter() {
        if values.is_empty() {
            continue;
        }
        any = true;
        let joined = values.iter().cloned().collect::<Vec<_>>().join(", ");
        println!(
            "    {:<9}: {}",
            color(role_color(role), role.as_str()),
            joined
        );
    }
    if !any {
        println!("    (none)");
    }
}

/// Print the linguistic-features view: the first 10 POS tags, the first
/// 10 non-punctuation dependency edges, and all entities.
pub fn print_linguistic_features(doc: &AnalyzedDocument) {
    println!();
    println!("  linguistic features:");

    println!("    pos tags (first 10):");
    for token in doc.tokens.iter().filter(|t| t.pos != PosTag::Punct).take(10) {
        println!("      {:<15} -> {}", token.text, token.pos);
    }

    println!("    dependencies (first 10):");
    for token in doc
        .tokens
        .iter()
        .filter(|t| t.dep != DepLabel::Punct && t.dep != DepLabel::Root)
        .take(10)
    {
        let head = doc
            .tokens
            .get(token.head)
            .map(|h| h.text.as_str())
            .unwrap_or("?");
        println!("      {:<12} --{:<10}--> {}", token.text, token.dep, head);
    }

    if !doc.entities.is_empty() {
        println!("    entities:");
        for entity in &doc.entities {
            println!("      {:<20} ({})", entity.text, entity.label);
        }
    }
}
