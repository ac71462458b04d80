//! Dependency-based argument extraction.
//!
//! Walks parsed dependency edges outward from trigger-verb tokens to
//! recover the subject (candidate vessel) and prepositional objects
//! (candidate locations), and from cause-introducing tokens ("due",
//! "caused", "because") to recover cause phrases. Every candidate is
//! resolved to its enclosing noun phrase via
//! [`AnalyzedDocument::noun_phrase`].

use aground_core::{AnalyzedDocument, ArgumentBag, ArgumentRole, DepLabel};

use crate::lexicon::GroundingLexicon;

/// Extract vessel/location/cause candidates from dependency edges.
///
/// Covers only those three roles; aggregation unions the result with the
/// other strategies' bags.
#[must_use]
pub fn extract_by_dependency(lexicon: &GroundingLexicon, doc: &AnalyzedDocument) -> ArgumentBag {
    let mut bag = ArgumentBag::new();

    for (i, token) in doc.tokens.iter().enumerate() {
        if lexicon.is_trigger_verb(&token.lemma) || lexicon.is_trigger_verb(&token.lower) {
            // Subject children are vessel candidates
            for (j, child) in doc.children(i) {
                if child.dep.is_subject() {
                    bag.insert(ArgumentRole::Vessel, doc.noun_phrase(j));
                }
            }
            // Prepositional objects are location candidates
            for (j, child) in doc.children(i) {
                if child.dep == DepLabel::Prep {
                    for (k, grandchild) in doc.children(j) {
                        if grandchild.dep == DepLabel::Pobj {
                            bag.insert(ArgumentRole::Location, doc.noun_phrase(k));
                        }
                    }
                }
            }
        }

        if lexicon.is_cause_marker(&token.lower) {
            for (j, child) in doc.children(i) {
                if matches!(child.dep, DepLabel::Pobj | DepLabel::Agent) {
                    bag.insert(ArgumentRole::Cause, doc.noun_phrase(j));
                }
            }
        }
    }

    bag
}

#[cfg(test)]
mod tests {
    use super::*;
    use aground_core::{Chunk, PosTag, Token};

    /// "The ferry grounded near the reef due to fog"
    fn fixture() -> AnalyzedDocument {
        let text = "The ferry grounded near the reef due to fog";
        let mut doc = AnalyzedDocument::new(text);
        let words: Vec<(&str, PosTag)> = vec![
            ("The", PosTag::Determiner),
            ("ferry", PosTag::Noun),
            ("grounded", PosTag::Verb),
            ("near", PosTag::Adposition),
            ("the", PosTag::Determiner),
            ("reef", PosTag::Noun),
            ("due", PosTag::Adjective),
            ("to", PosTag::Adposition),
            ("fog", PosTag::Noun),
        ];
        let mut offset = 0usize;
        doc.tokens = words
            .into_iter()
            .enumerate()
            .map(|(i, (w, pos))| {
                let start = text[offset..].find(w).map(|p| offset + p).unwrap_or(0);
                offset = start + w.len();
                Token::new(w, pos, i, start, start + w.len())
            })
            .collect();
        doc.tokens[0] = doc.tokens[0].clone().with_dep(DepLabel::Det, 1);
        doc.tokens[1] = doc.tokens[1].clone().with_dep(DepLabel::Nsubj, 2);
        doc.tokens[3] = doc.tokens[3].clone().with_dep(DepLabel::Prep, 2);
        doc.tokens[4] = doc.tokens[4].clone().with_dep(DepLabel::Det, 5);
        doc.tokens[5] = doc.tokens[5].clone().with_dep(DepLabel::Pobj, 3);
        doc.tokens[8] = doc.tokens[8].clone().with_dep(DepLabel::Pobj, 6);
        doc.chunks = vec![
            Chunk::new(0, 2, "The ferry"),
            Chunk::new(4, 6, "the reef"),
            Chunk::new(8, 9, "fog"),
        ];
        doc
    }

    #[test]
    fn subject_becomes_vessel() {
        let bag = extract_by_dependency(&GroundingLexicon::new(), &fixture());
        assert!(bag.contains(ArgumentRole::Vessel, "The ferry"));
    }

    #[test]
    fn prepositional_object_becomes_location() {
        let bag = extract_by_dependency(&GroundingLexicon::new(), &fixture());
        assert!(bag.contains(ArgumentRole::Location, "the reef"));
    }

    #[test]
    fn cause_marker_object_becomes_cause() {
        let bag = extract_by_dependency(&GroundingLexicon::new(), &fixture());
        assert!(bag.contains(ArgumentRole::Cause, "fog"));
    }

    #[test]
    fn non_trigger_verbs_are_ignored() {
        let mut doc = fixture();
        // Replace the trigger with a verb outside the trigger set
        doc.tokens[2].text = "sailed".into();
        doc.tokens[2].lower = "sailed".into();
        doc.tokens[2].lemma = "sailed".into();
        let bag = extract_by_dependency(&GroundingLexicon::new(), &doc);
        assert!(bag.get(ArgumentRole::Vessel).is_empty());
        assert!(bag.get(ArgumentRole::Location).is_empty());
        // Cause walk is independent of trigger verbs
        assert!(bag.contains(ArgumentRole::Cause, "fog"));
    }
}
