//! Info command - version, analyzer and lexicon overview.

use crate::Analyzer;
use crate::heuristic::HeuristicAnalyzer;
use crate::lexicon::GroundingLexicon;

use super::super::output::color;

/// Print version, analyzer and lexicon overview.
pub fn run() -> Result<(), String> {
    println!("aground {}", env!("CARGO_PKG_VERSION"));
    println!();

    let analyzer = HeuristicAnalyzer::new();
    println!("analyzer:");
    println!(
        "  {} ({}) - {}",
        color("1;36", analyzer.name()),
        if analyzer.is_available() {
            "available"
        } else {
            "unavailable"
        },
        analyzer.description()
    );
    println!();

    let lexicon = GroundingLexicon::new();
    println!("lexicon:");
    println!("  triggers   : {}", lexicon.triggers().len());
    for (event_type, keywords) in lexicon.event_types() {
        println!("  {:<11}: {} keywords", event_type.as_str(), keywords.len());
    }
    println!();
    println!("argument keywords:");
    for (role, keywords) in lexicon.arguments() {
        println!("  {:<11}: {} keywords", role.as_str(), keywords.len());
    }
    println!();
    println!("matchers: keyword (default), pattern");

    Ok(())
}
