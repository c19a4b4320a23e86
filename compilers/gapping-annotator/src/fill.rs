use gapping_graph::SentenceGraph;
use gapping_protocol::TokenId;

use crate::catalog::{GappingPattern, PatternMatch};
use crate::predicate::PredicateChain;

/// Reconstructed material for one gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapFill {
    pub pattern: GappingPattern,
    pub gap: TokenId,
    pub predicate: String,
    /// Leading-space span of the elided object, empty unless the pattern elides one.
    pub object_span: String,
    /// `predicate` followed by `object_span`.
    pub text: String,
}

/// Words from the object's lowest to its highest dependent, inclusive, each
/// preceded by a space. The range is contiguous, so tokens between the object
/// and a distant dependent are included even when they are not dependents.
pub fn object_span(graph: &SentenceGraph, object: TokenId) -> String {
    let dependents = graph.dependents_of(object);
    let indices = std::iter::once(object).chain(dependents.iter().map(|e| e.dependent));

    let (first, last) = indices.fold((object, object), |(lo, hi), id| (lo.min(id), hi.max(id)));

    let mut span = String::new();
    for i in first.0..=last.0 {
        if let Some(word) = graph.word(TokenId(i)) {
            span.push(' ');
            span.push_str(word);
        }
    }
    span
}

/// Copular patterns share the copula's lemma instead of the predicate chain;
/// only patterns that elide the object copy its span.
pub fn synthesize(graph: &SentenceGraph, chain: &PredicateChain, matched: &PatternMatch) -> GapFill {
    let copula = matched
        .copula
        .filter(|_| matched.pattern.is_copular())
        .and_then(|copula| graph.lemma(copula));
    let predicate = copula.map_or_else(|| chain.text.clone(), str::to_string);

    let object_span = matched
        .object
        .filter(|_| matched.pattern.elides_object())
        .map(|object| object_span(graph, object))
        .unwrap_or_default();

    GapFill {
        pattern: matched.pattern,
        gap: matched.gap,
        text: format!("{predicate}{object_span}"),
        predicate,
        object_span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::resolve_predicate;
    use crate::tests::build;

    #[test]
    fn test_span_of_bare_object() {
        let graph = build(
            &[("John", "John"), ("reads", "read"), ("books", "book")],
            &[(0, 2, "root"), (2, 1, "nsubj"), (2, 3, "dobj")],
        );
        assert_eq!(object_span(&graph, TokenId(3)), " books");
    }

    #[test]
    fn test_span_covers_determiner_and_modifier() {
        // "reads the old paper about cats"
        let graph = build(
            &[
                ("reads", "read"),
                ("the", "the"),
                ("old", "old"),
                ("paper", "paper"),
                ("about", "about"),
                ("cats", "cat"),
            ],
            &[(0, 1, "root"), (4, 2, "det"), (4, 3, "amod"), (1, 4, "dobj"), (6, 5, "case"), (4, 6, "nmod")],
        );
        assert_eq!(object_span(&graph, TokenId(4)), " the old paper about cats");
    }

    #[test]
    fn test_span_includes_intervening_non_dependents() {
        // "the" (2) and "yesterday" (5) both hang off "paper" (3); "quietly" (4)
        // does not, but lies inside the range and is copied anyway.
        let graph = build(
            &[
                ("reads", "read"),
                ("the", "the"),
                ("paper", "paper"),
                ("quietly", "quietly"),
                ("yesterday", "yesterday"),
            ],
            &[(0, 1, "root"), (3, 2, "det"), (1, 3, "dobj"), (1, 4, "advmod"), (3, 5, "nmod:tmod")],
        );
        assert_eq!(object_span(&graph, TokenId(3)), " the paper quietly yesterday");
    }

    #[test]
    fn test_anchors_are_used_only_where_the_pattern_allows() {
        // "John is reading books"
        let graph = build(
            &[("John", "John"), ("is", "be"), ("reading", "read"), ("books", "book")],
            &[(0, 3, "root"), (3, 1, "nsubj"), (3, 2, "aux"), (3, 4, "dobj")],
        );
        let chain = resolve_predicate(&graph).unwrap();
        let anchored = |pattern| PatternMatch {
            pattern,
            gap: TokenId(2),
            object: Some(TokenId(4)),
            copula: Some(TokenId(2)),
        };

        let fill = synthesize(&graph, &chain, &anchored(GappingPattern::AdverbialConjunctModifier));
        assert_eq!(fill.text, "read");

        let fill = synthesize(&graph, &chain, &anchored(GappingPattern::AdverbialConjunct));
        assert_eq!(fill.text, "read books");

        let fill = synthesize(&graph, &chain, &anchored(GappingPattern::CopularConjunct));
        assert_eq!(fill.predicate, "be");
        assert!(fill.object_span.is_empty());
    }
}
