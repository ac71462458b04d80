//! Built-in heuristic linguistic analyzer.
//!
//! A pure-Rust, always-available [`Analyzer`] producing the annotations
//! the extraction pipeline consumes: offset-preserving tokens, coarse
//! POS tags from word lists and suffixes, noun-phrase chunks over POS
//! runs, clause-local dependency edges, and regex-based named entities.
//!
//! It is deliberately shallow — a statistical parser would do better on
//! open-domain text — but it is deterministic, fast, and tuned for the
//! short incident reports this toolkit targets. Swap in any other
//! [`Analyzer`] implementation for higher-quality annotations.

use aground_core::{
    bytes_to_chars, chars_to_bytes, AnalyzedDocument, Chunk, DepLabel, Entity, EntityLabel,
    PosTag, Token,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::Analyzer;

// ============================================================================
// Word lists for POS tagging
// ============================================================================

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "its", "their", "his", "her", "no", "all",
    "each", "every", "both", "some",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "near", "off", "by", "to", "of", "from", "with", "during", "for", "into",
    "onto", "under", "over", "before", "after", "against", "around", "through", "between",
];

const PRONOUNS: &[&str] = &[
    "it", "he", "she", "they", "we", "i", "you", "itself", "himself", "herself", "themselves",
    "who", "which",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "while", "as", "when", "until"];

const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "has", "have", "had", "do", "does",
    "did", "will", "would", "can", "could", "shall", "should", "may", "might", "must",
];

const ADVERBS: &[&str] = &[
    "aground", "ashore", "safely", "successfully", "quickly", "later", "earlier", "again", "not",
    "then", "there", "here", "yesterday", "today", "tomorrow", "soon", "still",
];

const ADJECTIVES: &[&str] = &[
    "strong", "poor", "heavy", "minor", "major", "severe", "successful", "safe", "rough",
    "shallow", "dense", "due", "high", "low", "several",
];

/// Irregular past forms tagged as verbs.
const IRREGULAR_PAST: &[&str] = &[
    "ran", "struck", "hit", "stuck", "sank", "broke", "went", "came", "took", "left", "began",
    "fell", "met", "sent", "got", "lost", "swept", "blew", "froze", "held", "sat",
];

/// Words ending in "ed" that are not verbs.
const NON_VERB_ED: &[&str] = &["seabed", "speed", "indeed", "seaweed", "bed", "shed", "hundred"];

/// Cause-introducing tokens whose object attaches directly to them, so
/// the cause walk reaches the phrase without traversing "to"/"by"/"of".
const CAUSE_ATTACH: &[&str] = &["due", "caused", "because"];

// ============================================================================
// Tokenizer
// ============================================================================

struct RawToken {
    text: String,
    start: usize,
    end: usize,
}

/// Offset-preserving tokenizer: word runs (alphanumeric, apostrophe,
/// hyphen) plus single-character punctuation tokens. Offsets are char
/// offsets.
fn tokenize(text: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut word: Option<(usize, String)> = None;

    for (idx, ch) in text.chars().enumerate() {
        if ch.is_alphanumeric() || ch == '\'' || ch == '-' {
            match &mut word {
                Some((_, s)) => s.push(ch),
                None => word = Some((idx, ch.to_string())),
            }
        } else {
            if let Some((start, s)) = word.take() {
                let end = start + s.chars().count();
                tokens.push(RawToken {
                    text: s,
                    start,
                    end,
                });
            }
            if !ch.is_whitespace() {
                tokens.push(RawToken {
                    text: ch.to_string(),
                    start: idx,
                    end: idx + 1,
                });
            }
        }
    }
    if let Some((start, s)) = word.take() {
        let end = start + s.chars().count();
        tokens.push(RawToken {
            text: s,
            start,
            end,
        });
    }
    tokens
}

// ============================================================================
// POS tagging
// ============================================================================

fn is_sentence_final(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | ";" | ":")
}

fn tag(raw: &[RawToken]) -> Vec<PosTag> {
    let mut tags: Vec<PosTag> = Vec::with_capacity(raw.len());
    for (i, token) in raw.iter().enumerate() {
        let text = token.text.as_str();
        let lower = text.to_lowercase();
        let word = lower.as_str();
        let first_upper = text.chars().next().map(char::is_uppercase).unwrap_or(false);
        let sentence_start = i == 0 || is_sentence_final(raw[i - 1].text.as_str());

        let tag = if text.chars().all(|c| !c.is_alphanumeric()) {
            PosTag::Punct
        } else if text.chars().all(|c| c.is_ascii_digit()) {
            PosTag::Number
        } else if DETERMINERS.contains(&word) {
            PosTag::Determiner
        } else if PREPOSITIONS.contains(&word) {
            PosTag::Adposition
        } else if PRONOUNS.contains(&word) {
            PosTag::Pronoun
        } else if CONJUNCTIONS.contains(&word) {
            PosTag::Conjunction
        } else if AUXILIARIES.contains(&word) {
            PosTag::Aux
        } else if ADVERBS.contains(&word) {
            PosTag::Adverb
        } else if ADJECTIVES.contains(&word) {
            PosTag::Adjective
        } else if IRREGULAR_PAST.contains(&word)
            || (word.len() > 4 && word.ends_with("ed") && !NON_VERB_ED.contains(&word))
        {
            PosTag::Verb
        } else if word.len() > 4 && word.ends_with("ing") {
            // "the grounding" is a noun, "blocking the waterway" a verb
            if i > 0 && tags[i - 1] == PosTag::Determiner {
                PosTag::Noun
            } else {
                PosTag::Verb
            }
        } else if first_upper && text.len() >= 2 && text.chars().all(char::is_uppercase) {
            PosTag::ProperNoun
        } else if first_upper && !sentence_start {
            PosTag::ProperNoun
        } else {
            PosTag::Noun
        };
        tags.push(tag);
    }
    tags
}

// ============================================================================
// Chunking
// ============================================================================

const fn chunkable(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::Determiner | PosTag::Adjective | PosTag::Noun | PosTag::ProperNoun | PosTag::Number
    )
}

fn build_chunks(tokens: &[Token], text: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..=tokens.len() {
        let in_run = i < tokens.len() && chunkable(tokens[i].pos);
        match (run_start, in_run) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                if tokens[start..i].iter().any(|t| t.pos.is_nominal()) {
                    let (bs, be) = chars_to_bytes(text, tokens[start].start, tokens[i - 1].end);
                    chunks.push(Chunk::new(start, i, &text[bs..be]));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    chunks
}

/// Head token of a chunk: the last nominal token, falling back to the
/// last token.
fn chunk_head(tokens: &[Token], chunk: &Chunk) -> usize {
    (chunk.start..chunk.end)
        .rev()
        .find(|&i| tokens[i].pos.is_nominal())
        .unwrap_or(chunk.end - 1)
}

// ============================================================================
// Dependency heuristics
// ============================================================================

/// Clause-local dependency assignment.
///
/// Within each sentence: the chunk directly before a verb (skipping
/// auxiliaries and adverbs) supplies the subject; post-verbal
/// prepositions attach to the verb with their following chunk head as
/// object; the first post-verbal chunk before any preposition is the
/// direct object. Cause markers get their object attached directly.
fn parse(tokens: &mut [Token], chunks: &[Chunk]) {
    let n = tokens.len();

    // Sentence ranges split at final punctuation
    let mut ranges = Vec::new();
    let mut start = 0;
    for i in 0..n {
        if is_sentence_final(tokens[i].text.as_str()) {
            ranges.push((start, i + 1));
            start = i + 1;
        }
    }
    if start < n {
        ranges.push((start, n));
    }

    // Intra-chunk attachments
    for chunk in chunks {
        let head = chunk_head(tokens, chunk);
        for i in chunk.start..chunk.end {
            if i == head {
                continue;
            }
            let dep = match tokens[i].pos {
                PosTag::Determiner => DepLabel::Det,
                PosTag::Adjective => DepLabel::Amod,
                _ => DepLabel::Compound,
            };
            tokens[i].dep = dep;
            tokens[i].head = head;
        }
    }

    for &(s, e) in &ranges {
        let verbs: Vec<usize> = (s..e).filter(|&i| tokens[i].pos == PosTag::Verb).collect();

        for &v in &verbs {
            // Scan left over auxiliaries/adverbs for the subject anchor
            let mut passive = false;
            let mut anchor = None;
            let mut k = v;
            while k > s {
                k -= 1;
                match tokens[k].pos {
                    PosTag::Adverb => {}
                    PosTag::Aux => {
                        tokens[k].dep = DepLabel::Aux;
                        tokens[k].head = v;
                        if tokens[v].lower.ends_with("ed") {
                            passive = true;
                        }
                    }
                    _ => {
                        anchor = Some(k);
                        break;
                    }
                }
            }
            if let Some(anchor) = anchor {
                if let Some(chunk) = chunks.iter().find(|c| c.end == anchor + 1) {
                    let head = chunk_head(tokens, chunk);
                    tokens[head].dep = if passive {
                        DepLabel::NsubjPass
                    } else {
                        DepLabel::Nsubj
                    };
                    tokens[head].head = v;
                } else if tokens[anchor].pos == PosTag::Pronoun {
                    tokens[anchor].dep = if passive {
                        DepLabel::NsubjPass
                    } else {
                        DepLabel::Nsubj
                    };
                    tokens[anchor].head = v;
                }
            }

            // Scan right for objects and prepositions, up to the next verb
            let until = verbs.iter().find(|&&w| w > v).copied().unwrap_or(e);
            let mut seen_prep = false;
            let mut m = v + 1;
            while m < until {
                if tokens[m].pos == PosTag::Adposition {
                    tokens[m].dep = DepLabel::Prep;
                    tokens[m].head = v;
                    seen_prep = true;
                    if let Some(chunk) = chunks.iter().find(|c| c.start == m + 1) {
                        let head = chunk_head(tokens, chunk);
                        tokens[head].dep = DepLabel::Pobj;
                        tokens[head].head = m;
                        m = chunk.end;
                        continue;
                    }
                } else if !seen_prep {
                    if let Some(chunk) = chunks.iter().find(|c| c.start == m) {
                        let head = chunk_head(tokens, chunk);
                        tokens[head].dep = DepLabel::Dobj;
                        tokens[head].head = v;
                        m = chunk.end;
                        continue;
                    }
                }
                m += 1;
            }
        }
    }

    // Cause markers: attach the object phrase head directly, skipping the
    // intermediate function word
    for i in 0..n {
        if !CAUSE_ATTACH.contains(&tokens[i].lower.as_str()) {
            continue;
        }
        let mut j = i + 1;
        let mut via_by = false;
        while j < n && matches!(tokens[j].lower.as_str(), "to" | "by" | "of") {
            via_by |= tokens[j].lower == "by";
            j += 1;
        }
        if j == i + 1 {
            continue; // bare "due"/"caused"/"because" without its function word
        }
        if let Some(chunk) = chunks.iter().find(|c| c.start == j) {
            let head = chunk_head(tokens, chunk);
            tokens[head].dep = if via_by { DepLabel::Agent } else { DepLabel::Pobj };
            tokens[head].head = i;
        }
    }
}

// ============================================================================
// Named entity recognition
// ============================================================================

fn spans_overlap(s1: usize, e1: usize, s2: usize, e2: usize) -> bool {
    !(e1 <= s2 || e2 <= s1)
}

/// Strip leading articles ("The ", "A ", "An ") from entity text.
fn strip_leading_article(text: &str) -> &str {
    text.strip_prefix("The ")
        .or_else(|| text.strip_prefix("A "))
        .or_else(|| text.strip_prefix("An "))
        .unwrap_or(text)
}

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December";

fn recognize(text: &str) -> Vec<Entity> {
    // Pattern 1: dates
    static DATE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(&format!(
            r"\b(?:(?:{MONTHS})\s+\d{{1,2}}(?:,\s*\d{{4}})?|\d{{1,2}}\s+(?:{MONTHS})(?:\s+\d{{4}})?|(?:Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)(?:\s+(?:morning|afternoon|evening|night))?|(?:yesterday|today|tomorrow)(?:\s+(?:morning|afternoon|evening|night))?|(?:19|20)\d{{2}})\b"
        ))
        .expect("date pattern")
    });

    // Pattern 2: clock times
    static TIME_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:\d{1,2}:\d{2}(?:\s*[APap]\.?[Mm]\.?)?|\d{1,2}\s*[AP]M)\b")
            .expect("time pattern")
    });

    // Pattern 3: response/authority organizations
    static ORG_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:[A-Z][A-Za-z]+\s+)*(?:Coast\s+Guard|Port\s+Authority|Navy|Maritime\s+(?:Authority|Agency|Administration)|Rescue\s+Coordination\s+Cent(?:er|re))\b")
            .expect("org pattern")
    });

    // Pattern 4: vessel names by prefix (MV Ever Given)
    static VESSEL_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:MV|MT|MS|SS)\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?\b")
            .expect("vessel prefix pattern")
    });

    // Pattern 5: vessel names after a class noun (ferry Blue Star)
    static VESSEL_NAMED_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:[Ss]hip|[Ff]erry|[Tt]anker|[Cc]arrier|[Vv]essel|[Bb]oat)\s+([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)?)\b")
            .expect("vessel name pattern")
    });

    // Pattern 6: marine place names by feature suffix
    static PLACE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:[A-Z][A-Za-z]+\s+)+(?:Canal|Strait|Straits|Reef|Bay|Harbor|Harbour|Channel|Sea|Ocean|Gulf|Sound|Island|Islands|Coast|Beach|Shoal|Bank|Banks|River)\b")
            .expect("place pattern")
    });

    // Pattern 7: geo-political names after a locative preposition
    static GPE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:in|near|off|at|from)\s+(?:the\s+)?([A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*)\b")
            .expect("gpe pattern")
    });

    // Pattern 8: titled person names
    static PERSON_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b(?:Captain|Capt\.|Mr\.|Mrs\.|Ms\.|Dr\.)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?")
            .expect("person pattern")
    });

    // Candidates in byte offsets, priority-ordered with overlap skipping
    let mut spans: Vec<(usize, usize, EntityLabel)> = Vec::new();
    let claim = |spans: &mut Vec<(usize, usize, EntityLabel)>,
                     start: usize,
                     end: usize,
                     label: EntityLabel| {
        if !spans.iter().any(|(s, e, _)| spans_overlap(*s, *e, start, end)) {
            spans.push((start, end, label));
        }
    };

    for m in DATE_RE.find_iter(text) {
        claim(&mut spans, m.start(), m.end(), EntityLabel::Date);
    }
    for m in TIME_RE.find_iter(text) {
        claim(&mut spans, m.start(), m.end(), EntityLabel::Time);
    }
    for m in ORG_RE.find_iter(text) {
        let stripped = strip_leading_article(m.as_str());
        let start = m.start() + (m.as_str().len() - stripped.len());
        claim(&mut spans, start, m.end(), EntityLabel::Organization);
    }
    for m in VESSEL_PREFIX_RE.find_iter(text) {
        claim(&mut spans, m.start(), m.end(), EntityLabel::Organization);
    }
    for cap in VESSEL_NAMED_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            claim(&mut spans, name.start(), name.end(), EntityLabel::Organization);
        }
    }
    for m in PLACE_RE.find_iter(text) {
        let stripped = strip_leading_article(m.as_str());
        let start = m.start() + (m.as_str().len() - stripped.len());
        let label = match stripped.rsplit(' ').next() {
            Some("Canal" | "Harbor" | "Harbour") => EntityLabel::Facility,
            _ => EntityLabel::Location,
        };
        claim(&mut spans, start, m.end(), label);
    }
    for cap in GPE_RE.captures_iter(text) {
        if let Some(name) = cap.get(1) {
            claim(&mut spans, name.start(), name.end(), EntityLabel::Gpe);
        }
    }
    for m in PERSON_RE.find_iter(text) {
        claim(&mut spans, m.start(), m.end(), EntityLabel::Person);
    }

    spans.sort_by_key(|(s, e, _)| (*s, *e));
    spans
        .into_iter()
        .map(|(bs, be, label)| {
            let (cs, ce) = bytes_to_chars(text, bs, be);
            Entity::new(&text[bs..be], label, cs, ce)
        })
        .collect()
}

// ============================================================================
// Analyzer
// ============================================================================

/// Pure-Rust heuristic analyzer, always available.
#[derive(Debug, Clone, Default)]
pub struct HeuristicAnalyzer {
    _private: (),
}

impl HeuristicAnalyzer {
    /// Create the analyzer. Infallible — all static patterns compile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str) -> Result<AnalyzedDocument> {
        let mut doc = AnalyzedDocument::new(text);
        let raw = tokenize(text);
        let tags = tag(&raw);
        doc.tokens = raw
            .into_iter()
            .zip(tags)
            .enumerate()
            .map(|(i, (t, pos))| Token::new(t.text, pos, i, t.start, t.end))
            .collect();
        doc.chunks = build_chunks(&doc.tokens, text);
        parse(&mut doc.tokens, &doc.chunks);
        doc.entities = recognize(text);
        Ok(doc)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn description(&self) -> &'static str {
        "Pure-Rust heuristic analyzer: list/suffix POS tagging, clause-local dependencies, regex NER"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(text: &str) -> AnalyzedDocument {
        HeuristicAnalyzer::new().analyze(text).unwrap()
    }

    #[test]
    fn tokenizer_preserves_offsets() {
        let doc = analyze("The ferry struck rocks.");
        let words: Vec<&str> = doc.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["The", "ferry", "struck", "rocks", "."]);
        for t in &doc.tokens {
            assert_eq!(&doc.text[t.start..t.end], t.text);
        }
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let doc = analyze("");
        assert!(doc.tokens.is_empty());
        assert!(doc.chunks.is_empty());
        assert!(doc.entities.is_empty());

        let doc = analyze("   \n  ");
        assert!(doc.tokens.is_empty());
    }

    #[test]
    fn pos_tags_for_simple_clause() {
        let doc = analyze("The cargo ship MV Ever Given ran aground.");
        let tags: Vec<PosTag> = doc.tokens.iter().map(|t| t.pos).collect();
        assert_eq!(tags[0], PosTag::Determiner);
        assert_eq!(tags[1], PosTag::Noun);
        assert_eq!(tags[2], PosTag::Noun);
        assert_eq!(tags[3], PosTag::ProperNoun); // MV
        assert_eq!(tags[4], PosTag::ProperNoun);
        assert_eq!(tags[5], PosTag::ProperNoun);
        assert_eq!(tags[6], PosTag::Verb); // ran
        assert_eq!(tags[7], PosTag::Adverb); // aground
    }

    #[test]
    fn gerund_after_determiner_is_noun() {
        let doc = analyze("The grounding was caused by fog, blocking the channel.");
        let grounding = &doc.tokens[1];
        assert_eq!(grounding.pos, PosTag::Noun);
        let blocking = doc.tokens.iter().find(|t| t.lower == "blocking").unwrap();
        assert_eq!(blocking.pos, PosTag::Verb);
    }

    #[test]
    fn subject_chunk_attaches_to_verb() {
        let doc = analyze("The cargo ship MV Ever Given ran aground in the Suez Canal.");
        let ran = doc.tokens.iter().position(|t| t.lower == "ran").unwrap();
        let subject = doc
            .children(ran)
            .find(|(_, t)| t.dep.is_subject())
            .expect("subject");
        assert_eq!(
            doc.noun_phrase(subject.0),
            "The cargo ship MV Ever Given"
        );
    }

    #[test]
    fn prepositional_object_resolves_to_chunk() {
        let doc = analyze("The ship grounded on a reef near the coast.");
        let grounded = doc.tokens.iter().position(|t| t.lower == "grounded").unwrap();
        let preps: Vec<usize> = doc
            .children(grounded)
            .filter(|(_, t)| t.dep == DepLabel::Prep)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(preps.len(), 2);
        let pobj = doc
            .children(preps[0])
            .find(|(_, t)| t.dep == DepLabel::Pobj)
            .expect("pobj");
        assert_eq!(doc.noun_phrase(pobj.0), "a reef");
    }

    #[test]
    fn passive_subject_is_nsubjpass() {
        let doc = analyze("The vessel was successfully refloated.");
        let refloated = doc
            .tokens
            .iter()
            .position(|t| t.lower == "refloated")
            .unwrap();
        let subject = doc
            .children(refloated)
            .find(|(_, t)| t.dep.is_subject())
            .expect("subject");
        assert_eq!(subject.1.dep, DepLabel::NsubjPass);
        assert_eq!(doc.noun_phrase(subject.0), "The vessel");
    }

    #[test]
    fn cause_marker_gets_direct_object() {
        let doc = analyze("The grounding was caused by strong winds.");
        let caused = doc.tokens.iter().position(|t| t.lower == "caused").unwrap();
        let agent = doc
            .children(caused)
            .find(|(_, t)| t.dep == DepLabel::Agent)
            .expect("agent");
        assert_eq!(doc.noun_phrase(agent.0), "strong winds");

        let doc = analyze("It collided with a sandbar due to navigation error.");
        let due = doc.tokens.iter().position(|t| t.lower == "due").unwrap();
        let pobj = doc
            .children(due)
            .find(|(_, t)| t.dep == DepLabel::Pobj)
            .expect("pobj");
        assert_eq!(doc.noun_phrase(pobj.0), "navigation error");
    }

    #[test]
    fn ner_finds_dates_and_places() {
        let doc = analyze("The ship ran aground in the Suez Canal on March 23, 2021.");
        let date = doc
            .entities
            .iter()
            .find(|e| e.label == EntityLabel::Date)
            .expect("date entity");
        assert_eq!(date.text, "March 23, 2021");

        let place = doc
            .entities
            .iter()
            .find(|e| e.label.is_place())
            .expect("place entity");
        assert_eq!(place.text, "Suez Canal");
        assert_eq!(place.label, EntityLabel::Facility);
    }

    #[test]
    fn ner_finds_vessels_and_organizations() {
        let doc = analyze("The ferry Blue Star was assisted by the Philippine Coast Guard.");
        let texts: Vec<(&str, &EntityLabel)> = doc
            .entities
            .iter()
            .map(|e| (e.text.as_str(), &e.label))
            .collect();
        assert!(texts.contains(&("Blue Star", &EntityLabel::Organization)));
        assert!(texts.contains(&("Philippine Coast Guard", &EntityLabel::Organization)));
    }

    #[test]
    fn ner_offsets_are_char_offsets() {
        let doc = analyze("MV Ever Given stuck near Suez.");
        for e in &doc.entities {
            let (bs, be) = chars_to_bytes(&doc.text, e.start, e.end);
            assert_eq!(&doc.text[bs..be], e.text);
        }
    }

    #[test]
    fn clock_time_recognized() {
        let doc = analyze("It beached itself at 3:00 AM.");
        assert!(doc
            .entities
            .iter()
            .any(|e| e.label == EntityLabel::Time && e.text.starts_with("3:00")));
    }
}
