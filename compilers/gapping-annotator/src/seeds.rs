use gapping_graph::{Edge, SentenceGraph};
use gapping_protocol::{RelationKind, RelationSet};

use crate::predicate::PredicateChain;

/// Relations around the predicate that can take part in a gapping signature.
pub const SEED_RELATIONS: RelationSet = RelationSet::from_bits_retain(
    RelationSet::DOBJ.bits()
        | RelationSet::PUNCT.bits()
        | RelationSet::CONJ.bits()
        | RelationSet::NMOD.bits()
        | RelationSet::ADVCL.bits()
        | RelationSet::ADVMOD.bits()
        | RelationSet::COP.bits(),
);

/// Seed edges: governed by the root or by the end of its `xcomp` chain,
/// sentence-final periods excluded, ascending by dependent index.
pub fn collect_seeds<'g>(graph: &'g SentenceGraph, chain: &PredicateChain) -> Vec<Edge<'g>> {
    graph
        .edges()
        .filter(|e| e.governor == chain.root || e.governor == chain.end)
        .filter(|e| e.is_in(SEED_RELATIONS))
        .filter(|e| !(e.is(RelationKind::Punct) && graph.word(e.dependent) == Some(".")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::resolve_predicate;
    use crate::tests::build;
    use gapping_protocol::TokenId;

    #[test]
    fn test_seeds_skip_period_and_unrelated_relations() {
        // "Mary likes coffee , and John tea ."
        let graph = build(
            &[
                ("Mary", "Mary"),
                ("likes", "like"),
                ("coffee", "coffee"),
                (",", ","),
                ("and", "and"),
                ("John", "John"),
                ("tea", "tea"),
                (".", "."),
            ],
            &[
                (0, 2, "root"),
                (2, 1, "nsubj"),
                (2, 3, "dobj"),
                (2, 4, "punct"),
                (2, 5, "cc"),
                (2, 6, "nsubj"),
                (2, 7, "dobj"),
                (2, 8, "punct"),
            ],
        );
        let chain = resolve_predicate(&graph).unwrap();
        let seeds = collect_seeds(&graph, &chain);

        let shape: Vec<(u32, RelationKind)> = seeds.iter().map(|e| (e.dependent.0, e.kind())).collect();
        assert_eq!(
            shape,
            vec![(3, RelationKind::Dobj), (4, RelationKind::Punct), (7, RelationKind::Dobj)]
        );
    }

    #[test]
    fn test_seeds_from_both_ends_of_the_chain() {
        // "I want to eat apples , and you pears ."
        let graph = build(
            &[
                ("I", "I"),
                ("want", "want"),
                ("to", "to"),
                ("eat", "eat"),
                ("apples", "apple"),
                (",", ","),
                ("and", "and"),
                ("you", "you"),
                ("pears", "pear"),
                (".", "."),
            ],
            &[
                (0, 2, "root"),
                (2, 1, "nsubj"),
                (4, 3, "mark"),
                (2, 4, "xcomp"),
                (4, 5, "dobj"),
                (2, 6, "punct"),
                (2, 7, "cc"),
                (2, 8, "nsubj"),
                (4, 9, "dobj"),
                (2, 10, "punct"),
            ],
        );
        let chain = resolve_predicate(&graph).unwrap();
        let seeds = collect_seeds(&graph, &chain);

        let dependents: Vec<TokenId> = seeds.iter().map(|e| e.dependent).collect();
        assert_eq!(dependents, vec![TokenId(5), TokenId(6), TokenId(9)]);
    }
}
