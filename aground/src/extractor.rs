//! The grounding-event extractor: composes trigger matching, event-type
//! resolution, the three argument strategies and aggregation into one
//! synchronous `extract` call.

use aground_core::{AnalyzedDocument, ArgumentBag, EventType, ExtractionResult, TriggerMatch};

use crate::dependency::extract_by_dependency;
use crate::entities::classify_entities;
use crate::error::Result;
use crate::lexicon::GroundingLexicon;
use crate::matcher::{KeywordMatcher, PatternMatcher};
use crate::Analyzer;

/// Which argument-matching strategy the extractor runs alongside the
/// dependency walk and entity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherKind {
    /// Literal keyword matching over raw text. Works without an
    /// analyzer (degraded mode keeps triggers and keyword arguments).
    #[default]
    Keyword,
    /// Token-sequence patterns over the analyzed document. No analyzer
    /// fallback: extraction yields the empty shape when analysis is
    /// unavailable.
    TokenPattern,
}

impl MatcherKind {
    /// Short name for display.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MatcherKind::Keyword => "keyword",
            MatcherKind::TokenPattern => "pattern",
        }
    }
}

/// Extracts trigger words, an event type and semantic arguments from one
/// text at a time.
///
/// The linguistic analyzer is injected at construction and shared,
/// read-only, across calls. Triggers always come from dictionary
/// matching over the raw text; arguments are the union of the configured
/// matcher strategy, the dependency walk and entity classification.
pub struct GroundingExtractor {
    lexicon: GroundingLexicon,
    keywords: KeywordMatcher,
    patterns: PatternMatcher,
    kind: MatcherKind,
    analyzer: Option<Box<dyn Analyzer>>,
}

impl GroundingExtractor {
    /// Create a keyword-mode extractor over `analyzer`.
    pub fn new(analyzer: Box<dyn Analyzer>) -> Result<Self> {
        Self::build(Some(analyzer), MatcherKind::Keyword)
    }

    /// Create an extractor with an explicit matcher strategy.
    pub fn with_matcher_kind(analyzer: Box<dyn Analyzer>, kind: MatcherKind) -> Result<Self> {
        Self::build(Some(analyzer), kind)
    }

    /// Create an extractor with no analyzer at all: dictionary matching
    /// over raw text is all that runs.
    pub fn keyword_only() -> Result<Self> {
        Self::build(None, MatcherKind::Keyword)
    }

    fn build(analyzer: Option<Box<dyn Analyzer>>, kind: MatcherKind) -> Result<Self> {
        if let Some(analyzer) = &analyzer {
            if !analyzer.is_available() {
                // Reported once here; extraction degrades silently per call
                log::warn!(
                    "[GroundingExtractor] analyzer '{}' unavailable; linguistic extraction disabled",
                    analyzer.name()
                );
            }
        }
        let lexicon = GroundingLexicon::new();
        let keywords = KeywordMatcher::new(&lexicon)?;
        Ok(Self {
            lexicon,
            keywords,
            patterns: PatternMatcher::grounding(),
            kind,
            analyzer,
        })
    }

    /// The configured matcher strategy.
    #[must_use]
    pub fn matcher_kind(&self) -> MatcherKind {
        self.kind
    }

    /// The keyword dictionaries in use.
    #[must_use]
    pub fn lexicon(&self) -> &GroundingLexicon {
        &self.lexicon
    }

    /// The injected analyzer, if any.
    #[must_use]
    pub fn analyzer(&self) -> Option<&dyn Analyzer> {
        self.analyzer.as_deref()
    }

    /// Run linguistic analysis, or `None` when no usable analyzer exists
    /// or the per-call analysis fails (logged, never fatal).
    #[must_use]
    pub fn analyze(&self, text: &str) -> Option<AnalyzedDocument> {
        let analyzer = self.analyzer.as_ref()?;
        if !analyzer.is_available() {
            return None;
        }
        match analyzer.analyze(text) {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::warn!("[GroundingExtractor] analysis failed: {e}");
                None
            }
        }
    }

    /// Every whole-word trigger occurrence in `text`.
    #[must_use]
    pub fn find_triggers(&self, text: &str) -> Vec<TriggerMatch> {
        self.keywords.find_triggers(text)
    }

    /// Score trigger matches against the event-type keyword sets.
    ///
    /// No triggers → `Unknown`. Otherwise each scored type counts the
    /// triggers whose keyword belongs to its set (one keyword may count
    /// toward several types); the strictly highest count wins, ties
    /// break toward the first-declared type, and an all-zero score falls
    /// back to `MarineAccident`.
    #[must_use]
    pub fn resolve_event_type(&self, triggers: &[TriggerMatch]) -> EventType {
        if triggers.is_empty() {
            return EventType::Unknown;
        }
        let mut best = EventType::MarineAccident;
        let mut best_count = 0usize;
        for (event_type, keywords) in self.lexicon.event_types() {
            let count = triggers
                .iter()
                .filter(|t| keywords.contains(&t.keyword.as_str()))
                .count();
            if count > best_count {
                best = *event_type;
                best_count = count;
            }
        }
        best
    }

    /// Extract triggers, event type and aggregated arguments from `text`.
    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let doc = self.analyze(text);
        if self.kind == MatcherKind::TokenPattern && doc.is_none() {
            return ExtractionResult::empty(text);
        }

        let triggers = self.find_triggers(text);
        let event_type = self.resolve_event_type(&triggers);

        let matcher_bag = match (self.kind, &doc) {
            (MatcherKind::Keyword, _) => self.keywords.find_arguments(text),
            (MatcherKind::TokenPattern, Some(doc)) => self.patterns.find_arguments(doc),
            (MatcherKind::TokenPattern, None) => ArgumentBag::new(),
        };
        let (dependency_bag, entity_bag) = match &doc {
            Some(doc) => (
                extract_by_dependency(&self.lexicon, doc),
                classify_entities(&self.lexicon, doc),
            ),
            None => (ArgumentBag::new(), ArgumentBag::new()),
        };

        ExtractionResult {
            text: text.to_string(),
            triggers,
            event_type,
            arguments: aggregate(matcher_bag, dependency_bag, entity_bag),
        }
    }
}

/// Union the three strategy bags per role, deduplicating by exact
/// string equality. Every role stays present in the output.
#[must_use]
pub fn aggregate(
    matcher: ArgumentBag,
    dependency: ArgumentBag,
    entities: ArgumentBag,
) -> ArgumentBag {
    let mut out = ArgumentBag::new();
    out.merge(matcher);
    out.merge(dependency);
    out.merge(entities);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockAnalyzer;
    use aground_core::ArgumentRole;

    fn keyword_only() -> GroundingExtractor {
        GroundingExtractor::keyword_only().unwrap()
    }

    fn triggers(words: &[&str]) -> Vec<TriggerMatch> {
        words
            .iter()
            .map(|w| TriggerMatch::new(*w, *w, 0, w.len()))
            .collect()
    }

    #[test]
    fn no_triggers_resolves_unknown() {
        let extractor = keyword_only();
        assert_eq!(extractor.resolve_event_type(&[]), EventType::Unknown);
    }

    #[test]
    fn single_type_triggers_resolve_to_that_type() {
        let extractor = keyword_only();
        assert_eq!(
            extractor.resolve_event_type(&triggers(&["grounded", "aground"])),
            EventType::Grounding
        );
        assert_eq!(
            extractor.resolve_event_type(&triggers(&["struck"])),
            EventType::Collision
        );
        assert_eq!(
            extractor.resolve_event_type(&triggers(&["stranded", "beached"])),
            EventType::Stranding
        );
    }

    #[test]
    fn tie_breaks_toward_first_declared_type() {
        let extractor = keyword_only();
        // grounding: 2 (grounded, aground), collision: 2 (struck, hit)
        let tied = triggers(&["grounded", "aground", "struck", "hit"]);
        for _ in 0..10 {
            assert_eq!(extractor.resolve_event_type(&tied), EventType::Grounding);
        }
    }

    #[test]
    fn strictly_higher_count_wins_regardless_of_order() {
        let extractor = keyword_only();
        let t = triggers(&["grounded", "struck", "hit", "collided"]);
        assert_eq!(extractor.resolve_event_type(&t), EventType::Collision);
    }

    #[test]
    fn unmapped_triggers_fall_back_to_marine_accident() {
        let extractor = keyword_only();
        // "foundered" is a trigger keyword but belongs to no scored type
        assert_eq!(
            extractor.resolve_event_type(&triggers(&["foundered"])),
            EventType::MarineAccident
        );
    }

    #[test]
    fn keyword_only_extraction_still_finds_triggers() {
        let extractor = keyword_only();
        let result = extractor.extract("The ferry struck rocks near the harbor.");
        assert_eq!(result.event_type, EventType::Collision);
        assert!(result.trigger_words().contains(&"struck"));
        assert!(result.arguments.contains(ArgumentRole::Location, "harbor"));
        // "rock" is the dictionary form; "rocks" must not match whole-word
        assert!(!result.arguments.contains(ArgumentRole::Location, "rocks"));
        assert!(result.arguments.contains(ArgumentRole::Vessel, "ferry"));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let extractor = keyword_only();
        let result = extractor.extract("");
        assert!(result.triggers.is_empty());
        assert_eq!(result.event_type, EventType::Unknown);
        assert!(result.arguments.is_empty());
        // Stable schema: every role present even on empty input
        assert_eq!(result.arguments.iter().count(), ArgumentRole::ALL.len());
    }

    #[test]
    fn unavailable_analyzer_degrades_keyword_mode() {
        let analyzer = MockAnalyzer::new("down").unavailable();
        let extractor = GroundingExtractor::new(Box::new(analyzer)).unwrap();
        let result = extractor.extract("The tanker ran aground on a sandbar.");
        assert_eq!(result.event_type, EventType::Grounding);
        assert!(result.arguments.contains(ArgumentRole::Vessel, "tanker"));
    }

    #[test]
    fn unavailable_analyzer_empties_pattern_mode() {
        let analyzer = MockAnalyzer::new("down").unavailable();
        let extractor =
            GroundingExtractor::with_matcher_kind(Box::new(analyzer), MatcherKind::TokenPattern)
                .unwrap();
        let result = extractor.extract("The tanker ran aground on a sandbar.");
        assert!(result.triggers.is_empty());
        assert_eq!(result.event_type, EventType::Unknown);
        assert!(result.arguments.is_empty());
    }

    #[test]
    fn aggregate_is_idempotent() {
        let mut a = ArgumentBag::new();
        a.insert(ArgumentRole::Location, "Suez Canal");
        let mut b = ArgumentBag::new();
        b.insert(ArgumentRole::Location, "Suez Canal");
        b.insert(ArgumentRole::Vessel, "MV Ever Given");
        let c = ArgumentBag::new();

        let once = aggregate(a.clone(), b.clone(), c.clone());
        let twice = aggregate(once.clone(), once.clone(), once.clone());
        assert_eq!(once, twice);
    }
}
