//! Trigger and argument matching over raw text and token sequences.
//!
//! Two matchers share the same vocabulary but different inputs:
//!
//! - [`KeywordMatcher`] scans raw text for whole-word, case-insensitive
//!   occurrences of dictionary keywords. It needs no linguistic analysis
//!   and keeps working when the analyzer is unavailable.
//! - [`PatternMatcher`] applies ordered [`Pattern`] lists to an analyzed
//!   token sequence. A pattern is either a literal keyword or a sequence
//!   of per-token constraints; both answer "does this match at this token
//!   position", so the matcher iterates them uniformly.

use aground_core::{
    bytes_to_chars, chars_to_bytes, AnalyzedDocument, ArgumentBag, ArgumentRole, PosTag,
    TriggerMatch,
};
use regex::Regex;

use crate::error::{Error, Result};
use crate::lexicon::GroundingLexicon;

/// Compile a whole-word, case-insensitive regex for one keyword.
fn word_regex(keyword: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword)))
        .map_err(|e| Error::pattern(format!("keyword '{keyword}': {e}")))
}

// ============================================================================
// Keyword matcher
// ============================================================================

/// Whole-word keyword matching over raw text.
#[derive(Debug)]
pub struct KeywordMatcher {
    triggers: Vec<(&'static str, Regex)>,
    arguments: Vec<(ArgumentRole, Vec<Regex>)>,
}

impl KeywordMatcher {
    /// Compile the lexicon's trigger and argument keywords.
    pub fn new(lexicon: &GroundingLexicon) -> Result<Self> {
        let triggers = lexicon
            .triggers()
            .iter()
            .map(|kw| Ok((*kw, word_regex(kw)?)))
            .collect::<Result<Vec<_>>>()?;

        let arguments = lexicon
            .arguments()
            .iter()
            .map(|(role, keywords)| {
                let regexes = keywords
                    .iter()
                    .map(|kw| word_regex(kw))
                    .collect::<Result<Vec<_>>>()?;
                Ok((*role, regexes))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            triggers,
            arguments,
        })
    }

    /// Every whole-word occurrence of every trigger keyword.
    ///
    /// Overlapping and duplicate occurrences are all returned ("ran
    /// aground" and "aground" both report on the same span) — type
    /// scoring depends on raw counts. Matches are ordered by position
    /// for stable output.
    #[must_use]
    pub fn find_triggers(&self, text: &str) -> Vec<TriggerMatch> {
        let mut matches = Vec::new();
        for (keyword, re) in &self.triggers {
            for m in re.find_iter(text) {
                let (start, end) = bytes_to_chars(text, m.start(), m.end());
                matches.push(TriggerMatch::new(*keyword, m.as_str(), start, end));
            }
        }
        matches.sort_by_key(|t| (t.start, t.end));
        matches
    }

    /// Every whole-word occurrence of every argument keyword, recorded
    /// with the original casing from the source text.
    #[must_use]
    pub fn find_arguments(&self, text: &str) -> ArgumentBag {
        let mut bag = ArgumentBag::new();
        for (role, regexes) in &self.arguments {
            for re in regexes {
                for m in re.find_iter(text) {
                    bag.insert(*role, m.as_str());
                }
            }
        }
        bag
    }
}

// ============================================================================
// Token-sequence patterns
// ============================================================================

/// A single-token constraint within a token-sequence pattern.
#[derive(Debug, Clone, Copy)]
pub enum TokenConstraint {
    /// Lowercase form equals the word
    Lower(&'static str),
    /// Lowercase form is one of the words
    LowerIn(&'static [&'static str]),
    /// Exact surface text is one of the strings
    TextIn(&'static [&'static str]),
    /// Part-of-speech tag equals
    Pos(PosTag),
    /// Token lies inside a place-type entity (GPE/LOC/FAC)
    InPlaceEntity,
}

impl TokenConstraint {
    fn matches(&self, doc: &AnalyzedDocument, index: usize) -> bool {
        let token = &doc.tokens[index];
        match self {
            TokenConstraint::Lower(word) => token.lower == *word,
            TokenConstraint::LowerIn(words) => words.contains(&token.lower.as_str()),
            TokenConstraint::TextIn(texts) => texts.contains(&token.text.as_str()),
            TokenConstraint::Pos(tag) => token.pos == *tag,
            TokenConstraint::InPlaceEntity => doc
                .entities
                .iter()
                .any(|e| e.label.is_place() && e.start <= token.start && token.end <= e.end),
        }
    }
}

/// One matchable pattern: a literal keyword or a token-constraint
/// sequence.
#[derive(Debug, Clone, Copy)]
pub enum Pattern {
    /// Literal keyword (possibly multi-word), matched case-insensitively
    /// against consecutive token texts
    Keyword(&'static str),
    /// Ordered per-token constraints
    Tokens(&'static [TokenConstraint]),
}

impl Pattern {
    /// Try to match starting at token `index`; returns the exclusive end
    /// token index on success.
    fn match_at(&self, doc: &AnalyzedDocument, index: usize) -> Option<usize> {
        match self {
            Pattern::Keyword(keyword) => {
                let words: Vec<&str> = keyword.split_whitespace().collect();
                let end = index + words.len();
                if words.is_empty() || end > doc.tokens.len() {
                    return None;
                }
                words
                    .iter()
                    .zip(&doc.tokens[index..end])
                    .all(|(w, t)| t.text.eq_ignore_ascii_case(w))
                    .then_some(end)
            }
            Pattern::Tokens(constraints) => {
                let end = index + constraints.len();
                if constraints.is_empty() || end > doc.tokens.len() {
                    return None;
                }
                constraints
                    .iter()
                    .enumerate()
                    .all(|(offset, c)| c.matches(doc, index + offset))
                    .then_some(end)
            }
        }
    }
}

// Built-in marine pattern sets, one ordered list per argument role.

const VESSEL_PREFIXES: &[&str] = &["MV", "MT", "MS", "SS"];

const VESSEL_PATTERNS: &[Pattern] = &[
    Pattern::Tokens(&[
        TokenConstraint::TextIn(VESSEL_PREFIXES),
        TokenConstraint::Pos(PosTag::ProperNoun),
        TokenConstraint::Pos(PosTag::ProperNoun),
    ]),
    Pattern::Tokens(&[
        TokenConstraint::TextIn(VESSEL_PREFIXES),
        TokenConstraint::Pos(PosTag::ProperNoun),
    ]),
    Pattern::Tokens(&[
        TokenConstraint::LowerIn(&["cargo", "container", "bulk", "cruise"]),
        TokenConstraint::Lower("ship"),
        TokenConstraint::Pos(PosTag::ProperNoun),
    ]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("ferry"),
        TokenConstraint::Pos(PosTag::ProperNoun),
    ]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("tanker"),
        TokenConstraint::Pos(PosTag::ProperNoun),
    ]),
];

const LOCATION_PATTERNS: &[Pattern] = &[
    Pattern::Tokens(&[TokenConstraint::LowerIn(&[
        "reef", "rock", "shoal", "sandbar", "beach", "coast",
    ])]),
    Pattern::Tokens(&[TokenConstraint::LowerIn(&[
        "harbor", "port", "channel", "strait", "bay",
    ])]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("near"),
        TokenConstraint::InPlaceEntity,
    ]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("in"),
        TokenConstraint::InPlaceEntity,
    ]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("off"),
        TokenConstraint::InPlaceEntity,
    ]),
];

const CAUSE_PATTERNS: &[Pattern] = &[
    Pattern::Tokens(&[TokenConstraint::LowerIn(&[
        "weather", "storm", "fog", "wind", "wave",
    ])]),
    Pattern::Tokens(&[
        TokenConstraint::Lower("strong"),
        TokenConstraint::LowerIn(&["wind", "current", "wave"]),
    ]),
    Pattern::Keyword("poor visibility"),
    Pattern::Tokens(&[
        TokenConstraint::LowerIn(&["navigation", "mechanical", "engine", "steering"]),
        TokenConstraint::LowerIn(&["error", "failure"]),
    ]),
    Pattern::Keyword("human error"),
];

const DAMAGE_PATTERNS: &[Pattern] = &[
    Pattern::Tokens(&[TokenConstraint::LowerIn(&[
        "damage", "breach", "hole", "crack", "leak",
    ])]),
    Pattern::Keyword("oil spill"),
    Pattern::Keyword("hull damage"),
    Pattern::Tokens(&[
        TokenConstraint::LowerIn(&["minor", "major", "severe"]),
        TokenConstraint::Lower("damage"),
    ]),
];

const RESPONSE_PATTERNS: &[Pattern] = &[
    Pattern::Tokens(&[TokenConstraint::LowerIn(&[
        "rescue", "salvage", "tow", "refloat", "evacuate",
    ])]),
    Pattern::Keyword("coast guard"),
    Pattern::Keyword("emergency response"),
    Pattern::Tokens(&[
        TokenConstraint::LowerIn(&["dispatched", "deployed", "sent"]),
        TokenConstraint::LowerIn(&["team", "teams", "crews", "vessels"]),
    ]),
];

// ============================================================================
// Pattern matcher
// ============================================================================

/// Ordered token-sequence pattern matching over an analyzed document.
#[derive(Debug)]
pub struct PatternMatcher {
    rules: Vec<(ArgumentRole, &'static [Pattern])>,
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::grounding()
    }
}

impl PatternMatcher {
    /// The built-in marine-incident pattern set.
    #[must_use]
    pub fn grounding() -> Self {
        Self {
            rules: vec![
                (ArgumentRole::Vessel, VESSEL_PATTERNS),
                (ArgumentRole::Location, LOCATION_PATTERNS),
                (ArgumentRole::Cause, CAUSE_PATTERNS),
                (ArgumentRole::Damage, DAMAGE_PATTERNS),
                (ArgumentRole::Response, RESPONSE_PATTERNS),
            ],
        }
    }

    /// Apply every role's pattern list over the token sequence.
    ///
    /// All non-overlapping match spans per role contribute their covered
    /// source text; overlaps resolve leftmost-first, longest at equal
    /// start.
    #[must_use]
    pub fn find_arguments(&self, doc: &AnalyzedDocument) -> ArgumentBag {
        let mut bag = ArgumentBag::new();
        for (role, patterns) in &self.rules {
            let mut spans: Vec<(usize, usize)> = Vec::new();
            for pattern in *patterns {
                for start in 0..doc.tokens.len() {
                    if let Some(end) = pattern.match_at(doc, start) {
                        spans.push((start, end));
                    }
                }
            }
            spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

            let mut claimed = 0usize;
            for (start, end) in spans {
                if start >= claimed {
                    let first = &doc.tokens[start];
                    let last = &doc.tokens[end - 1];
                    let (byte_start, byte_end) = chars_to_bytes(&doc.text, first.start, last.end);
                    bag.insert(*role, &doc.text[byte_start..byte_end]);
                    claimed = end;
                }
            }
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aground_core::{Entity, EntityLabel, Token};

    fn matcher() -> KeywordMatcher {
        KeywordMatcher::new(&GroundingLexicon::new()).unwrap()
    }

    #[test]
    fn triggers_are_whole_word_only() {
        let m = matcher();
        assert!(m.find_triggers("a background check").is_empty());
        assert!(m.find_triggers("hitting the books").is_empty());

        let found = m.find_triggers("The ship ran aground.");
        let keywords: Vec<&str> = found.iter().map(|t| t.keyword.as_str()).collect();
        assert!(keywords.contains(&"ran aground"));
        assert!(keywords.contains(&"aground"));
    }

    #[test]
    fn triggers_record_char_offsets() {
        let m = matcher();
        let text = "Vessel GROUNDED near shore";
        let found = m.find_triggers(text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].keyword, "grounded");
        assert_eq!(found[0].text, "GROUNDED");
        assert_eq!(&text[found[0].start..found[0].end], "GROUNDED");
    }

    #[test]
    fn duplicate_occurrences_all_kept() {
        let m = matcher();
        let found = m.find_triggers("It struck once, then struck again.");
        assert_eq!(found.iter().filter(|t| t.keyword == "struck").count(), 2);
    }

    #[test]
    fn arguments_preserve_original_casing() {
        let m = matcher();
        let bag = m.find_arguments("The Ferry left the HARBOR.");
        assert!(bag.contains(ArgumentRole::Vessel, "Ferry"));
        assert!(bag.contains(ArgumentRole::Location, "HARBOR"));
    }

    fn pattern_doc(text: &str, tags: &[(usize, PosTag)]) -> AnalyzedDocument {
        // Word tokens with default Noun tags, selectively overridden.
        // Offsets computed directly: text is ASCII in these tests.
        let mut doc = AnalyzedDocument::new(text);
        let mut offset = 0usize;
        doc.tokens = text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| {
                let start = text[offset..].find(word).map(|p| offset + p).unwrap_or(0);
                offset = start + word.len();
                Token::new(word, PosTag::Noun, i, start, start + word.len())
            })
            .collect();
        for (i, tag) in tags {
            doc.tokens[*i].pos = *tag;
        }
        doc
    }

    #[test]
    fn token_patterns_match_vessel_prefix() {
        let doc = pattern_doc(
            "MV Ever Given stuck",
            &[(1, PosTag::ProperNoun), (2, PosTag::ProperNoun)],
        );
        let bag = PatternMatcher::grounding().find_arguments(&doc);
        assert!(bag.contains(ArgumentRole::Vessel, "MV Ever Given"));
    }

    #[test]
    fn overlapping_spans_resolve_leftmost_longest() {
        // Both the 3-token and 2-token MV patterns match at token 0; only
        // the longest span is kept.
        let doc = pattern_doc(
            "MV Ever Given",
            &[(1, PosTag::ProperNoun), (2, PosTag::ProperNoun)],
        );
        let bag = PatternMatcher::grounding().find_arguments(&doc);
        assert_eq!(bag.get(ArgumentRole::Vessel).len(), 1);
    }

    #[test]
    fn keyword_pattern_matches_token_sequence() {
        let doc = pattern_doc("poor visibility reported", &[]);
        let bag = PatternMatcher::grounding().find_arguments(&doc);
        assert!(bag.contains(ArgumentRole::Cause, "poor visibility"));
    }

    #[test]
    fn place_entity_constraint() {
        let mut doc = pattern_doc("anchored near Batangas", &[(2, PosTag::ProperNoun)]);
        let start = doc.text.find("Batangas").unwrap();
        doc.entities.push(Entity::new(
            "Batangas",
            EntityLabel::Gpe,
            start,
            start + "Batangas".len(),
        ));
        let bag = PatternMatcher::grounding().find_arguments(&doc);
        assert!(bag.contains(ArgumentRole::Location, "near Batangas"));
    }
}
