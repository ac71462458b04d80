//! Entity re-bucketing: named entities → argument roles.
//!
//! The mapping is a hard classification over an explicit, precedence-
//! ordered rule table — first matching rule wins, no scoring. Keeping
//! the table as data makes the precedence testable and extensible
//! without touching control flow.

use aground_core::{AnalyzedDocument, ArgumentBag, ArgumentRole, Entity, EntityLabel};

use crate::lexicon::GroundingLexicon;

/// Condition side of a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Condition {
    /// GPE/location/facility entity
    PlaceEntity,
    /// Date or clock-time entity
    TemporalEntity,
    /// Organization whose text carries a responder cue
    ResponseOrganization,
    /// Any other organization (vessel names usually land here)
    Organization,
    /// Person entity
    PersonEntity,
}

impl Condition {
    fn matches(&self, entity: &Entity, lexicon: &GroundingLexicon) -> bool {
        match self {
            Condition::PlaceEntity => entity.label.is_place(),
            Condition::TemporalEntity => entity.label.is_temporal(),
            Condition::ResponseOrganization => {
                entity.label == EntityLabel::Organization && lexicon.has_response_cue(&entity.text)
            }
            Condition::Organization => entity.label == EntityLabel::Organization,
            Condition::PersonEntity => entity.label == EntityLabel::Person,
        }
    }
}

/// Precedence-ordered rule table; evaluated top to bottom.
pub const CLASSIFY_RULES: &[(Condition, ArgumentRole)] = &[
    (Condition::PlaceEntity, ArgumentRole::Location),
    (Condition::TemporalEntity, ArgumentRole::Time),
    (Condition::ResponseOrganization, ArgumentRole::Response),
    (Condition::Organization, ArgumentRole::Vessel),
    (Condition::PersonEntity, ArgumentRole::Person),
];

/// Classify one entity; `None` when no rule applies.
#[must_use]
pub fn classify_entity(entity: &Entity, lexicon: &GroundingLexicon) -> Option<ArgumentRole> {
    CLASSIFY_RULES
        .iter()
        .find(|(condition, _)| condition.matches(entity, lexicon))
        .map(|(_, role)| *role)
}

/// Re-bucket every entity of the document into argument roles.
#[must_use]
pub fn classify_entities(lexicon: &GroundingLexicon, doc: &AnalyzedDocument) -> ArgumentBag {
    let mut bag = ArgumentBag::new();
    for entity in &doc.entities {
        if let Some(role) = classify_entity(entity, lexicon) {
            bag.insert(role, entity.text.clone());
        }
    }
    bag
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> GroundingLexicon {
        GroundingLexicon::new()
    }

    #[test]
    fn coast_guard_is_response_never_vessel() {
        let entity = Entity::new("Philippine Coast Guard", EntityLabel::Organization, 0, 22);
        assert_eq!(
            classify_entity(&entity, &lexicon()),
            Some(ArgumentRole::Response)
        );
    }

    #[test]
    fn plain_organization_is_vessel() {
        let entity = Entity::new("Ever Given", EntityLabel::Organization, 0, 10);
        assert_eq!(
            classify_entity(&entity, &lexicon()),
            Some(ArgumentRole::Vessel)
        );
    }

    #[test]
    fn place_and_temporal_buckets() {
        let lex = lexicon();
        for (label, expected) in [
            (EntityLabel::Gpe, ArgumentRole::Location),
            (EntityLabel::Location, ArgumentRole::Location),
            (EntityLabel::Facility, ArgumentRole::Location),
            (EntityLabel::Date, ArgumentRole::Time),
            (EntityLabel::Time, ArgumentRole::Time),
            (EntityLabel::Person, ArgumentRole::Person),
        ] {
            let entity = Entity::new("x", label, 0, 1);
            assert_eq!(classify_entity(&entity, &lex), Some(expected));
        }
    }

    #[test]
    fn unknown_labels_are_unclassified() {
        let entity = Entity::new("$5M", EntityLabel::Other("MONEY".into()), 0, 3);
        assert_eq!(classify_entity(&entity, &lexicon()), None);
    }

    #[test]
    fn rule_order_puts_cue_check_before_plain_org() {
        // The table must test ResponseOrganization before Organization,
        // or every responder would be classified as a vessel.
        let response_idx = CLASSIFY_RULES
            .iter()
            .position(|(c, _)| *c == Condition::ResponseOrganization)
            .unwrap();
        let org_idx = CLASSIFY_RULES
            .iter()
            .position(|(c, _)| *c == Condition::Organization)
            .unwrap();
        assert!(response_idx < org_idx);
    }
}
