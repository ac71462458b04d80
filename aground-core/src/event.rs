//! Event model: trigger matches, event types, argument bags and the
//! extraction result.
//!
//! One extraction call over one document produces one
//! [`ExtractionResult`]; it has no lifecycle beyond that call — no
//! persistence, no mutation after construction.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

// ============================================================================
// Event types
// ============================================================================

/// Coarse event classification assigned per document.
///
/// The first four variants are the *scored* types: declaration order is
/// the tie-break order when two types collect the same trigger count.
/// `MarineAccident` is the fallback when triggers exist but none maps to
/// a scored type; `Unknown` means no trigger was found at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum EventType {
    /// Vessel ran aground
    Grounding,
    /// Vessel struck or collided with something
    Collision,
    /// Vessel stranded, beached or stuck
    Stranding,
    /// Generic accident/incident wording
    Accident,
    /// Triggers present but none maps to a scored type
    MarineAccident,
    /// No trigger found
    Unknown,
}

impl EventType {
    /// The scored types, in declaration (= tie-break) order.
    pub const SCORED: [EventType; 4] = [
        EventType::Grounding,
        EventType::Collision,
        EventType::Stranding,
        EventType::Accident,
    ];

    /// Snake_case label, as serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventType::Grounding => "grounding",
            EventType::Collision => "collision",
            EventType::Stranding => "stranding",
            EventType::Accident => "accident",
            EventType::MarineAccident => "marine_accident",
            EventType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Argument roles
// ============================================================================

/// Semantic role an extracted text span can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentRole {
    /// The vessel involved
    Vessel,
    /// Where the incident happened
    Location,
    /// What caused it
    Cause,
    /// When it happened
    Time,
    /// Damage sustained
    Damage,
    /// Response actions and responders
    Response,
    /// People mentioned (kept separate from vessels)
    Person,
}

impl ArgumentRole {
    /// Every role, in the stable schema order.
    pub const ALL: [ArgumentRole; 7] = [
        ArgumentRole::Vessel,
        ArgumentRole::Location,
        ArgumentRole::Cause,
        ArgumentRole::Time,
        ArgumentRole::Damage,
        ArgumentRole::Response,
        ArgumentRole::Person,
    ];

    /// Snake_case label, as serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArgumentRole::Vessel => "vessel",
            ArgumentRole::Location => "location",
            ArgumentRole::Cause => "cause",
            ArgumentRole::Time => "time",
            ArgumentRole::Damage => "damage",
            ArgumentRole::Response => "response",
            ArgumentRole::Person => "person",
        }
    }
}

impl std::fmt::Display for ArgumentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Trigger matches
// ============================================================================

/// One occurrence of a trigger keyword in the source text.
///
/// Overlapping and duplicate occurrences are all retained — event type
/// scoring depends on raw counts. The covered substring always equals
/// `keyword` case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMatch {
    /// Dictionary keyword that matched (lowercase dictionary form)
    pub keyword: String,
    /// Matched surface text (original casing)
    pub text: String,
    /// Start character offset
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
}

impl TriggerMatch {
    /// Create a trigger match.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        text: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            start,
            end,
        }
    }
}

// ============================================================================
// Argument bag
// ============================================================================

/// Mapping from argument role to the set of distinct surface strings
/// extracted for it.
///
/// Deduplication is by case-sensitive exact string equality — "Coast
/// Guard" and "coast guard" stay distinct. Every role in
/// [`ArgumentRole::ALL`] is always present (empty or not), so callers see
/// a stable schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentBag {
    roles: BTreeMap<ArgumentRole, BTreeSet<String>>,
}

impl Default for ArgumentBag {
    fn default() -> Self {
        Self::new()
    }
}

impl ArgumentBag {
    /// Create a bag with every role present and empty.
    #[must_use]
    pub fn new() -> Self {
        let roles = ArgumentRole::ALL
            .iter()
            .map(|r| (*r, BTreeSet::new()))
            .collect();
        Self { roles }
    }

    /// Add a surface string for `role`. Empty strings are ignored.
    pub fn insert(&mut self, role: ArgumentRole, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.roles.entry(role).or_default().insert(value);
        }
    }

    /// Add every string from `values` for `role`.
    pub fn extend<I, S>(&mut self, role: ArgumentRole, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(role, value);
        }
    }

    /// The set of strings extracted for `role`.
    #[must_use]
    pub fn get(&self, role: ArgumentRole) -> &BTreeSet<String> {
        static EMPTY: OnceLock<BTreeSet<String>> = OnceLock::new();
        self.roles
            .get(&role)
            .unwrap_or_else(|| EMPTY.get_or_init(BTreeSet::new))
    }

    /// Is `value` present for `role` (exact match)?
    #[must_use]
    pub fn contains(&self, role: ArgumentRole, value: &str) -> bool {
        self.get(role).contains(value)
    }

    /// Does any string for `role` contain `needle` as a substring?
    ///
    /// Convenient for assertions against phrase-level extractions where
    /// the exact chunk boundary ("the Suez Canal" vs "Suez Canal") is an
    /// analyzer detail.
    #[must_use]
    pub fn any_contains(&self, role: ArgumentRole, needle: &str) -> bool {
        self.get(role).iter().any(|v| v.contains(needle))
    }

    /// Union `other` into this bag.
    pub fn merge(&mut self, other: ArgumentBag) {
        for (role, values) in other.roles {
            self.roles.entry(role).or_default().extend(values);
        }
    }

    /// True when every role's set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.values().all(BTreeSet::is_empty)
    }

    /// Iterate roles and their sets in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (ArgumentRole, &BTreeSet<String>)> {
        self.roles.iter().map(|(r, v)| (*r, v))
    }
}

// ============================================================================
// Extraction result
// ============================================================================

/// The sole externally visible artifact of one extraction call.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResult {
    /// Original input text
    pub text: String,
    /// All trigger occurrences, duplicates included
    pub triggers: Vec<TriggerMatch>,
    /// Resolved event type
    pub event_type: EventType,
    /// Aggregated arguments, all roles present
    pub arguments: ArgumentBag,
}

impl ExtractionResult {
    /// The degraded/empty shape: no triggers, `Unknown`, all-empty bag.
    #[must_use]
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            triggers: Vec::new(),
            event_type: EventType::Unknown,
            arguments: ArgumentBag::new(),
        }
    }

    /// The matched dictionary keywords, in match order, duplicates kept.
    #[must_use]
    pub fn trigger_words(&self) -> Vec<&str> {
        self.triggers.iter().map(|t| t.keyword.as_str()).collect()
    }

    /// Wire shape: `{text, trigger_words, event_type, arguments}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "text": self.text,
            "trigger_words": self.trigger_words(),
            "event_type": self.event_type,
            "arguments": self.arguments,
        })
    }

    /// Wire shape plus `trigger_positions`, an array of
    /// `[keyword, start, end]` triples.
    #[must_use]
    pub fn to_json_with_positions(&self) -> serde_json::Value {
        let mut value = self.to_json();
        let positions: Vec<serde_json::Value> = self
            .triggers
            .iter()
            .map(|t| json!([t.keyword, t.start, t.end]))
            .collect();
        value["trigger_positions"] = json!(positions);
        value
    }
}
