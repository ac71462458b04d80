//! Analyzed-document model: the contract between a linguistic analyzer and
//! the extraction pipeline.
//!
//! An [`AnalyzedDocument`] is the input text plus everything the analyzer
//! derived from it: a token sequence with per-token lemma, part-of-speech
//! tag, dependency label and head reference; noun-phrase chunks; and named
//! entities. Documents are immutable once produced and owned by a single
//! extraction call.
//!
//! All offsets are **character** offsets, not byte offsets. Use
//! [`crate::offset::bytes_to_chars`] when converting regex match positions.

use serde::{Deserialize, Serialize};

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Coarse part-of-speech tag, UD-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun
    ProperNoun,
    /// Main verb
    Verb,
    /// Auxiliary or modal verb
    Aux,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Adposition (preposition)
    Adposition,
    /// Determiner
    Determiner,
    /// Pronoun
    Pronoun,
    /// Coordinating conjunction
    Conjunction,
    /// Numeral
    Number,
    /// Punctuation
    Punct,
    /// Anything else
    Other,
}

impl PosTag {
    /// UD-compatible label string.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Adposition => "ADP",
            PosTag::Determiner => "DET",
            PosTag::Pronoun => "PRON",
            PosTag::Conjunction => "CCONJ",
            PosTag::Number => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Other => "X",
        }
    }

    /// Parse from a UD-style label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "VERB" => PosTag::Verb,
            "AUX" => PosTag::Aux,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "ADP" => PosTag::Adposition,
            "DET" => PosTag::Determiner,
            "PRON" => PosTag::Pronoun,
            "CCONJ" | "CONJ" | "SCONJ" => PosTag::Conjunction,
            "NUM" => PosTag::Number,
            "PUNCT" => PosTag::Punct,
            _ => PosTag::Other,
        }
    }

    /// Can this tag head or extend a noun phrase?
    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun | PosTag::Number)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ============================================================================
// Dependency labels
// ============================================================================

/// Grammatical relation between a token and its syntactic head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DepLabel {
    /// Nominal subject
    Nsubj,
    /// Passive nominal subject
    NsubjPass,
    /// Direct object
    Dobj,
    /// Prepositional modifier
    Prep,
    /// Object of a preposition
    Pobj,
    /// Passive agent ("caused *by* strong winds")
    Agent,
    /// Determiner
    Det,
    /// Adjectival modifier
    Amod,
    /// Compound noun modifier
    Compound,
    /// Auxiliary
    Aux,
    /// Sentence root
    Root,
    /// Punctuation
    Punct,
    /// Anything else
    Other,
}

impl DepLabel {
    /// Label string in the conventional lowercase form.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            DepLabel::Nsubj => "nsubj",
            DepLabel::NsubjPass => "nsubjpass",
            DepLabel::Dobj => "dobj",
            DepLabel::Prep => "prep",
            DepLabel::Pobj => "pobj",
            DepLabel::Agent => "agent",
            DepLabel::Det => "det",
            DepLabel::Amod => "amod",
            DepLabel::Compound => "compound",
            DepLabel::Aux => "aux",
            DepLabel::Root => "ROOT",
            DepLabel::Punct => "punct",
            DepLabel::Other => "dep",
        }
    }

    /// Parse from a conventional label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "nsubj" => DepLabel::Nsubj,
            "nsubjpass" | "nsubj:pass" => DepLabel::NsubjPass,
            "dobj" | "obj" => DepLabel::Dobj,
            "prep" => DepLabel::Prep,
            "pobj" => DepLabel::Pobj,
            "agent" => DepLabel::Agent,
            "det" => DepLabel::Det,
            "amod" => DepLabel::Amod,
            "compound" => DepLabel::Compound,
            "aux" => DepLabel::Aux,
            "root" => DepLabel::Root,
            "punct" => DepLabel::Punct,
            _ => DepLabel::Other,
        }
    }

    /// Subject-type relation (active or passive).
    #[must_use]
    pub const fn is_subject(&self) -> bool {
        matches!(self, DepLabel::Nsubj | DepLabel::NsubjPass)
    }
}

impl std::fmt::Display for DepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

// ============================================================================
// Tokens and chunks
// ============================================================================

/// One token of the analyzed text.
///
/// `head` is the index of the syntactic head token within the same
/// document — a back-reference, not an ownership relation. The sentence
/// root points at itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the source
    pub text: String,
    /// Lowercase form
    pub lower: String,
    /// Lemma (base form)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Dependency label relating this token to its head
    pub dep: DepLabel,
    /// Index of the syntactic head token; the root points at itself
    pub head: usize,
    /// Start character offset
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Token {
    /// Create a token with lowercase form and lemma derived from the text.
    ///
    /// The dependency fields default to `Root`/self-head; analyzers fill
    /// them in during parsing.
    #[must_use]
    pub fn new(text: impl Into<String>, pos: PosTag, index: usize, start: usize, end: usize) -> Self {
        let text = text.into();
        let lower = text.to_lowercase();
        Self {
            lemma: lower.clone(),
            lower,
            text,
            pos,
            dep: DepLabel::Root,
            head: index,
            start,
            end,
        }
    }

    /// Builder-style dependency assignment.
    #[must_use]
    pub fn with_dep(mut self, dep: DepLabel, head: usize) -> Self {
        self.dep = dep;
        self.head = head;
        self
    }

    /// Builder-style lemma override.
    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }
}

/// A contiguous token range forming one noun-phrase-like unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Index of the first token in the chunk
    pub start: usize,
    /// Index one past the last token in the chunk
    pub end: usize,
    /// Covered surface text
    pub text: String,
}

impl Chunk {
    /// Create a chunk over `[start, end)` token indices.
    #[must_use]
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Does this chunk contain the token at `index`?
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Coarse category of a named entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EntityLabel {
    /// Geo-political entity (countries, cities)
    Gpe,
    /// Non-GPE location (seas, reefs, mountain ranges)
    Location,
    /// Facility (ports, canals, bridges)
    Facility,
    /// Date expression
    Date,
    /// Clock-time expression
    Time,
    /// Organization (companies, agencies — vessel names often land here)
    Organization,
    /// Person name
    Person,
    /// Analyzer-specific category outside the core set
    Other(String),
}

impl EntityLabel {
    /// Conventional uppercase label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            EntityLabel::Gpe => "GPE",
            EntityLabel::Location => "LOC",
            EntityLabel::Facility => "FAC",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Organization => "ORG",
            EntityLabel::Person => "PERSON",
            EntityLabel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a conventional label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_uppercase().as_str() {
            "GPE" => EntityLabel::Gpe,
            "LOC" | "LOCATION" => EntityLabel::Location,
            "FAC" | "FACILITY" => EntityLabel::Facility,
            "DATE" => EntityLabel::Date,
            "TIME" => EntityLabel::Time,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            "PERSON" | "PER" => EntityLabel::Person,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    /// Place-type entity (GPE, location or facility).
    #[must_use]
    pub const fn is_place(&self) -> bool {
        matches!(
            self,
            EntityLabel::Gpe | EntityLabel::Location | EntityLabel::Facility
        )
    }

    /// Temporal entity (date or clock time).
    #[must_use]
    pub const fn is_temporal(&self) -> bool {
        matches!(self, EntityLabel::Date | EntityLabel::Time)
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// A named entity: a contiguous text span plus a coarse category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    /// Entity text (surface form as it appears in the source)
    pub text: String,
    /// Coarse category
    pub label: EntityLabel,
    /// Start character offset
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl Entity {
    /// Create a new entity.
    #[must_use]
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }
}

// ============================================================================
// Analyzed document
// ============================================================================

/// The input text plus everything the linguistic analyzer derived from it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    /// Original input text
    pub text: String,
    /// Token sequence with POS/dependency annotations
    pub tokens: Vec<Token>,
    /// Noun-phrase chunks (contiguous token ranges)
    pub chunks: Vec<Chunk>,
    /// Named entities
    pub entities: Vec<Entity>,
}

impl AnalyzedDocument {
    /// Create an empty document over `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Direct syntactic children of the token at `index`.
    ///
    /// The root token (which heads itself) is not reported as its own
    /// child.
    pub fn children(&self, index: usize) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(move |(i, t)| t.head == index && *i != index)
    }

    /// The enclosing noun phrase of the token at `index`.
    ///
    /// Returns the covered text of the first chunk containing the token,
    /// falling back to the bare token text when no chunk contains it.
    #[must_use]
    pub fn noun_phrase(&self, index: usize) -> String {
        for chunk in &self.chunks {
            if chunk.contains(index) {
                return chunk.text.clone();
            }
        }
        self.tokens
            .get(index)
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }
}
