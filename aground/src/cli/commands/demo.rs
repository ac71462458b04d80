//! Demo command - runs the bundled sample incident passages.

use clap::Parser;

use super::super::output::{color, print_result};
use super::super::parser::{MatcherMode, OutputFormat};
use super::super::utils::build_extractor;

/// Sample passages covering the main trigger families.
pub const SAMPLES: &[&str] = &[
    "The cargo ship MV Ever Given ran aground in the Suez Canal on March 23, 2021, \
     blocking the waterway for six days. The grounding was caused by strong winds and \
     poor visibility during a sandstorm. The vessel was successfully refloated by \
     tugboats and the Egyptian authorities.",
    "A bulk carrier grounded on a reef near the Great Barrier Reef yesterday morning. \
     The vessel suffered hull damage and minor oil leak was reported. Coast Guard \
     dispatched emergency response teams to assess the situation.",
    "The ferry Blue Star struck rocks and beached itself near Sydney harbor entrance \
     during heavy fog conditions at 3:00 AM. All 150 passengers were safely evacuated \
     by rescue teams. Salvage operations are planned for high tide tomorrow morning.",
    "Container ship Ever Fortune collided with a sandbar in Singapore Strait on Monday \
     night due to navigation error. The 200-meter vessel remained stuck for 12 hours \
     before being freed by six tugboats. No injuries or pollution reported, but the \
     ship sustained minor hull damage.",
];

/// Run the bundled sample incident passages.
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Argument-matching strategy
    #[arg(short, long, default_value = "keyword")]
    pub matcher: MatcherMode,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,
}

/// Extract every bundled sample passage.
pub fn run(args: DemoArgs) -> Result<(), String> {
    let extractor = build_extractor(args.matcher)?;

    for (i, text) in SAMPLES.iter().enumerate() {
        let result = extractor.extract(text);
        match args.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
            ),
            OutputFormat::Human => {
                println!();
                println!(
                    "{} {} of {}",
                    color("1;36", "example"),
                    i + 1,
                    SAMPLES.len()
                );
                print_result(&result, false);
            }
        }
    }

    Ok(())
}
