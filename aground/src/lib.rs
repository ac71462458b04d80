//! # aground
//!
//! Ship-grounding incident event extraction for short English news
//! passages: trigger words, a coarse event type, and semantic arguments
//! (vessel, location, cause, time, damage, response, person).
//!
//! Linguistic understanding (tokens, POS tags, dependency edges, noun
//! chunks, named entities) comes from a pluggable [`Analyzer`]; the
//! built-in [`HeuristicAnalyzer`] needs no models or downloads. On top
//! of the analysis, the pipeline runs keyword/pattern matching, a
//! dependency walk and entity re-bucketing, then aggregates everything
//! into one [`ExtractionResult`].
//!
//! # Example
//!
//! ```rust
//! use aground::{EventType, GroundingExtractor, HeuristicAnalyzer};
//!
//! let extractor = GroundingExtractor::new(Box::new(HeuristicAnalyzer::new()))?;
//! let result = extractor.extract("The ferry struck rocks near the harbor.");
//!
//! assert_eq!(result.event_type, EventType::Collision);
//! assert!(result.trigger_words().contains(&"struck"));
//! # Ok::<(), aground::Error>(())
//! ```

#![warn(missing_docs)]

pub mod dependency;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod heuristic;
pub mod lexicon;
pub mod matcher;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export error types
pub use error::{Error, Result};

// Re-export aground-core types so callers need only this crate
pub use aground_core::{
    AnalyzedDocument, ArgumentBag, ArgumentRole, Chunk, DepLabel, Entity, EntityLabel, EventType,
    ExtractionResult, PosTag, Token, TriggerMatch,
};

// Re-export commonly used types
pub use extractor::{aggregate, GroundingExtractor, MatcherKind};
pub use heuristic::HeuristicAnalyzer;
pub use lexicon::GroundingLexicon;

// =============================================================================
// Sealed Trait Pattern
// =============================================================================

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::HeuristicAnalyzer {}
    impl Sealed for super::MockAnalyzer {}
}

/// Trait for linguistic analyzer backends.
///
/// The analyzer is loaded once, injected into the extractor, and treated
/// as read-only afterwards — no shared mutable state across calls. Tests
/// use [`MockAnalyzer`] to return canned documents without running real
/// analysis.
pub trait Analyzer: sealed::Sealed + Send + Sync {
    /// Analyze text into tokens, chunks and entities.
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument>;

    /// Check if the analyzer is loaded and ready.
    fn is_available(&self) -> bool;

    /// Get the analyzer name/identifier.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Get a description of the analyzer.
    fn description(&self) -> &'static str {
        "Unknown linguistic analyzer"
    }
}

/// A mock analyzer for testing purposes.
///
/// Returns a canned [`AnalyzedDocument`] regardless of analysis effort.
/// By default `analyze` validates that the canned document's text equals
/// the input text, so fixtures cannot silently drift from the strings a
/// test feeds in; use [`MockAnalyzer::without_validation`] to disable.
///
/// # Example
///
/// ```rust
/// use aground::{AnalyzedDocument, Analyzer, MockAnalyzer};
///
/// let mock = MockAnalyzer::new("test-mock")
///     .with_document(AnalyzedDocument::new("The ferry struck rocks."));
/// let doc = mock.analyze("The ferry struck rocks.").unwrap();
/// assert!(doc.tokens.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    name: &'static str,
    document: AnalyzedDocument,
    available: bool,
    /// If true, validate the canned document's text against the input
    validate: bool,
}

impl MockAnalyzer {
    /// Create a new mock analyzer returning an empty document.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            document: AnalyzedDocument::default(),
            available: true,
            validate: true,
        }
    }

    /// Set the canned document to return from `analyze`.
    #[must_use]
    pub fn with_document(mut self, document: AnalyzedDocument) -> Self {
        self.document = document;
        self
    }

    /// Report the analyzer as unavailable (for degraded-path tests).
    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Disable input-text validation during `analyze`.
    #[must_use]
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }
}

impl Analyzer for MockAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        if !self.available {
            return Err(Error::model_init(format!(
                "mock analyzer '{}' is unavailable",
                self.name
            )));
        }
        if self.validate && !self.document.text.is_empty() && self.document.text != text {
            return Err(Error::invalid_input(format!(
                "MockAnalyzer document text mismatch: expected '{}', got '{}'",
                self.document.text, text
            )));
        }
        Ok(self.document.clone())
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock analyzer returning a canned document for testing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_validates_input_text() {
        let mock = MockAnalyzer::new("m").with_document(AnalyzedDocument::new("expected text"));
        assert!(mock.analyze("expected text").is_ok());
        let err = mock.analyze("different text").unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn mock_validation_can_be_disabled() {
        let mock = MockAnalyzer::new("m")
            .with_document(AnalyzedDocument::new("expected text"))
            .without_validation();
        assert!(mock.analyze("different text").is_ok());
    }

    #[test]
    fn unavailable_mock_fails_to_analyze() {
        let mock = MockAnalyzer::new("m").unavailable();
        assert!(!mock.is_available());
        assert!(matches!(
            mock.analyze("text"),
            Err(Error::ModelInit(_))
        ));
    }
}
