//! The fixed catalog of gapping signatures.
//!
//! Each [`Signature`] is one row of the decision table. Rows are tried in
//! [`Signature::CATALOG`] order and the first full match wins; rows are
//! disjoint on seed count and relation sequence, so the order only matters as
//! a tie-break.

use std::fmt;

use gapping_graph::{Edge, SentenceGraph};
use gapping_protocol::{RelationKind, RelationSet, TokenId};

/// The ten recognised gapping shapes. The discriminants are the stable type
/// codes reported to downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GappingPattern {
    /// "Mary likes coffee, and John tea."
    ObjectContrast = 1,
    /// "John ate an apple and Mary, a pear."
    ConjunctAppositive = 2,
    /// "He left on Monday, and she on Tuesday."
    ModifierContrast = 3,
    /// "John runs fast and Mary, slowly."
    ConjunctModifier = 4,
    /// "She reads the paper in the morning, and he at night." (object elided too)
    ObjectModifierContrast = 5,
    /// "John reads books quickly and Mary, slowly." (object elided too)
    AdverbialConjunct = 6,
    /// "She reads the paper in the morning, and he the book at night."
    ObjectModifierPair = 7,
    /// Like 6, with a second adverb on the remnant: "... and Mary, very slowly."
    AdverbialConjunctModifier = 8,
    /// Copular predicate, remnant subject set off by punctuation.
    CopularSubject = 9,
    /// "John is happy, and Mary sad."
    CopularConjunct = 10,
}

impl GappingPattern {
    pub const ALL: [GappingPattern; 10] = [
        GappingPattern::ObjectContrast,
        GappingPattern::ConjunctAppositive,
        GappingPattern::ModifierContrast,
        GappingPattern::ConjunctModifier,
        GappingPattern::ObjectModifierContrast,
        GappingPattern::AdverbialConjunct,
        GappingPattern::ObjectModifierPair,
        GappingPattern::AdverbialConjunctModifier,
        GappingPattern::CopularSubject,
        GappingPattern::CopularConjunct,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.id() == id)
    }

    /// Whether the gap also hides the first conjunct's direct object.
    pub fn elides_object(self) -> bool {
        matches!(
            self,
            GappingPattern::ObjectModifierContrast | GappingPattern::AdverbialConjunct
        )
    }

    /// Whether the shared predicate is a copula rather than the root verb.
    pub fn is_copular(self) -> bool {
        matches!(
            self,
            GappingPattern::CopularSubject | GappingPattern::CopularConjunct
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            GappingPattern::ObjectContrast => "object-contrast",
            GappingPattern::ConjunctAppositive => "conjunct-appositive",
            GappingPattern::ModifierContrast => "modifier-contrast",
            GappingPattern::ConjunctModifier => "conjunct-modifier",
            GappingPattern::ObjectModifierContrast => "object-modifier-contrast",
            GappingPattern::AdverbialConjunct => "adverbial-conjunct",
            GappingPattern::ObjectModifierPair => "object-modifier-pair",
            GappingPattern::AdverbialConjunctModifier => "adverbial-conjunct-modifier",
            GappingPattern::CopularSubject => "copular-subject",
            GappingPattern::CopularConjunct => "copular-conjunct",
        }
    }
}

impl fmt::Display for GappingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} ({})", self.id(), self.name())
    }
}

/// Outcome of a successful signature match.
///
/// Rows record the anchors they matched on; which of them end up in the fill
/// is decided by [`GappingPattern::elides_object`] and
/// [`GappingPattern::is_copular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub pattern: GappingPattern,
    /// Token marking the elided material, usually the separating comma.
    pub gap: TokenId,
    /// First-conjunct direct object, when the row anchors on one.
    pub object: Option<TokenId>,
    /// Copula seed dependent of the copular rows.
    pub copula: Option<TokenId>,
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// 3 seeds: dobj, punct, dobj|nmod
    ObjectContrast,
    /// 3 seeds: modifier, punct, modifier
    ModifierContrast,
    /// 3 seeds: dobj, advmod, conj; remnant carries punct + adverbial
    AdverbialConjunct,
    /// 2 seeds: dobj|advmod, conj; remnant carries punct + appos|advmod|dep
    ConjunctRemnant,
    /// 2 seeds: cop, conj; remnant predicate has a subject set off by punct
    CopularSubject,
    /// 2 seeds: cop, conj; remnant carries punct + appos|advmod|amod
    CopularRemnant,
    /// 4 seeds: dobj, modifier, punct, modifier
    ObjectModifierContrast,
    /// 4 seeds: dobj, modifier, punct, dobj; second object has one modifier
    ObjectModifierPair,
}

const REMNANT_ADVERBIAL: RelationSet = RelationSet::from_bits_retain(
    RelationSet::ADVMOD.bits() | RelationSet::DEP.bits() | RelationSet::APPOS.bits(),
);

const COPULAR_REMNANT: RelationSet = RelationSet::from_bits_retain(
    RelationSet::APPOS.bits() | RelationSet::ADVMOD.bits() | RelationSet::AMOD.bits(),
);

impl Signature {
    /// Priority order.
    pub const CATALOG: [Signature; 8] = [
        Signature::ObjectContrast,
        Signature::ModifierContrast,
        Signature::AdverbialConjunct,
        Signature::ConjunctRemnant,
        Signature::CopularSubject,
        Signature::CopularRemnant,
        Signature::ObjectModifierContrast,
        Signature::ObjectModifierPair,
    ];

    pub fn try_match(self, graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
        match self {
            Signature::ObjectContrast => object_contrast(seeds),
            Signature::ModifierContrast => modifier_contrast(seeds),
            Signature::AdverbialConjunct => adverbial_conjunct(graph, seeds),
            Signature::ConjunctRemnant => conjunct_remnant(graph, seeds),
            Signature::CopularSubject => copular_subject(graph, seeds),
            Signature::CopularRemnant => copular_remnant(graph, seeds),
            Signature::ObjectModifierContrast => object_modifier_contrast(seeds),
            Signature::ObjectModifierPair => object_modifier_pair(graph, seeds),
        }
    }
}

/// First matching signature in catalog order.
pub fn classify(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    Signature::CATALOG
        .iter()
        .find_map(|signature| signature.try_match(graph, seeds))
}

/// Edges governed by `anchor` whose relation is in `accept`, ascending by dependent.
fn expand<'g>(graph: &'g SentenceGraph, anchor: TokenId, accept: RelationSet) -> Vec<Edge<'g>> {
    graph
        .dependents_of(anchor)
        .into_iter()
        .filter(|e| e.is_in(accept))
        .collect()
}

fn found(pattern: GappingPattern, gap: TokenId) -> PatternMatch {
    PatternMatch {
        pattern,
        gap,
        object: None,
        copula: None,
    }
}

fn found_with_object(pattern: GappingPattern, gap: TokenId, object: TokenId) -> PatternMatch {
    PatternMatch {
        object: Some(object),
        ..found(pattern, gap)
    }
}

fn object_contrast(seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    match seeds {
        [object, comma, remnant]
            if object.is(RelationKind::Dobj)
                && comma.is(RelationKind::Punct)
                && remnant.is_in(RelationSet::DOBJ | RelationSet::NMOD) =>
        {
            Some(found_with_object(GappingPattern::ObjectContrast, comma.dependent, object.dependent))
        }
        _ => None,
    }
}

fn modifier_contrast(seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    match seeds {
        [first, comma, remnant]
            if first.is_in(RelationSet::MODIFIER)
                && comma.is(RelationKind::Punct)
                && remnant.is_in(RelationSet::MODIFIER) =>
        {
            Some(found(GappingPattern::ModifierContrast, comma.dependent))
        }
        _ => None,
    }
}

fn adverbial_conjunct(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    let [object, adverb, conj] = seeds else {
        return None;
    };
    if !(object.is(RelationKind::Dobj) && adverb.is(RelationKind::Advmod) && conj.is(RelationKind::Conj)) {
        return None;
    }

    let tail = expand(graph, conj.dependent, RelationSet::PUNCT | REMNANT_ADVERBIAL);
    let [comma, remnant] = tail.as_slice() else {
        return None;
    };
    if !(comma.is(RelationKind::Punct) && remnant.is_in(REMNANT_ADVERBIAL)) {
        return None;
    }

    // Exactly one further adverb on the remnant makes it pattern 8
    let further = expand(graph, remnant.dependent, RelationSet::ADVMOD);
    let pattern = if further.len() == 1 {
        GappingPattern::AdverbialConjunctModifier
    } else {
        GappingPattern::AdverbialConjunct
    };
    Some(found_with_object(pattern, comma.dependent, object.dependent))
}

fn conjunct_remnant(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    let [first, conj] = seeds else {
        return None;
    };
    if !(first.is_in(RelationSet::DOBJ | RelationSet::ADVMOD) && conj.is(RelationKind::Conj)) {
        return None;
    }

    let tail = expand(
        graph,
        conj.dependent,
        RelationSet::PUNCT | RelationSet::APPOS | RelationSet::ADVMOD | RelationSet::DEP,
    );
    match tail.as_slice() {
        [comma, remnant] if comma.is(RelationKind::Punct) && remnant.is(RelationKind::Appos) => {
            Some(found(GappingPattern::ConjunctAppositive, comma.dependent))
        }
        [comma, remnant]
            if comma.is(RelationKind::Punct) && remnant.is_in(RelationSet::ADVMOD | RelationSet::DEP) =>
        {
            Some(found(GappingPattern::ConjunctModifier, comma.dependent))
        }
        _ => None,
    }
}

/// Shared entry for both copular rows: the copula and the remnant's dependents.
fn copular_tail<'g>(graph: &'g SentenceGraph, seeds: &[Edge<'g>]) -> Option<(Edge<'g>, Vec<Edge<'g>>)> {
    let [copula, conj] = seeds else {
        return None;
    };
    if !(copula.is(RelationKind::Cop) && conj.is(RelationKind::Conj)) {
        return None;
    }

    let tail = expand(
        graph,
        conj.dependent,
        RelationSet::NSUBJ | RelationSet::PUNCT | COPULAR_REMNANT,
    );
    Some((*copula, tail))
}

fn copular_subject(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    let (copula, tail) = copular_tail(graph, seeds)?;
    let [subject] = tail.as_slice() else {
        return None;
    };
    if !subject.is(RelationKind::Nsubj) {
        return None;
    }

    let marks = expand(graph, subject.dependent, RelationSet::PUNCT);
    let [comma] = marks.as_slice() else {
        return None;
    };

    Some(PatternMatch {
        copula: Some(copula.dependent),
        ..found(GappingPattern::CopularSubject, comma.dependent)
    })
}

fn copular_remnant(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    let (copula, tail) = copular_tail(graph, seeds)?;
    match tail.as_slice() {
        [comma, remnant] if comma.is(RelationKind::Punct) && remnant.is_in(COPULAR_REMNANT) => {
            Some(PatternMatch {
                copula: Some(copula.dependent),
                ..found(GappingPattern::CopularConjunct, comma.dependent)
            })
        }
        _ => None,
    }
}

fn object_modifier_contrast(seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    match seeds {
        [object, modifier, comma, remnant]
            if object.is(RelationKind::Dobj)
                && modifier.is_in(RelationSet::MODIFIER)
                && comma.is(RelationKind::Punct)
                && remnant.is_in(RelationSet::MODIFIER) =>
        {
            Some(found_with_object(
                GappingPattern::ObjectModifierContrast,
                comma.dependent,
                object.dependent,
            ))
        }
        _ => None,
    }
}

fn object_modifier_pair(graph: &SentenceGraph, seeds: &[Edge<'_>]) -> Option<PatternMatch> {
    let [object, modifier, comma, second_object] = seeds else {
        return None;
    };
    if !(object.is(RelationKind::Dobj)
        && modifier.is_in(RelationSet::MODIFIER)
        && comma.is(RelationKind::Punct)
        && second_object.is(RelationKind::Dobj))
    {
        return None;
    }

    let modifiers: Vec<Edge<'_>> = expand(graph, second_object.dependent, RelationSet::MODIFIER)
        .into_iter()
        .filter(|e| !e.relation.is_possessive())
        .collect();

    match modifiers.as_slice() {
        [_] => Some(found_with_object(
            GappingPattern::ObjectModifierPair,
            comma.dependent,
            object.dependent,
        )),
        _ => None,
    }
}
