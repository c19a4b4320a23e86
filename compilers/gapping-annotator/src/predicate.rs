use gapping_graph::SentenceGraph;
use gapping_protocol::{RelationKind, TokenId};

/// The main predicate of a sentence, extended through its chain of open
/// clausal complements ("want to eat").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateChain {
    /// Dependent of the `root` edge.
    pub root: TokenId,
    /// Deepest predicate reached through `xcomp`; `root` when there is no chain.
    pub end: TokenId,
    pub text: String,
}

/// Returns `None` when the sentence has no `root` edge.
pub fn resolve_predicate(graph: &SentenceGraph) -> Option<PredicateChain> {
    let root = graph.root()?.dependent;
    let mut text = graph.lemma(root)?.to_string();
    let mut end = root;

    // Each step consumes one edge, so a chain can never be longer than the edge set.
    for _ in 0..graph.edge_count() {
        let Some(next) = graph
            .edges_labeled(RelationKind::Xcomp)
            .find(|e| e.governor == end)
        else {
            break;
        };
        let Some(word) = graph.word(next.dependent) else {
            break;
        };

        text.push_str(" to ");
        text.push_str(word);
        end = next.dependent;
    }

    Some(PredicateChain { root, end, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::build;

    #[test]
    fn test_plain_root() {
        let graph = build(
            &[("Mary", "Mary"), ("likes", "like"), ("coffee", "coffee")],
            &[(0, 2, "root"), (2, 1, "nsubj"), (2, 3, "dobj")],
        );
        let chain = resolve_predicate(&graph).unwrap();
        assert_eq!(chain.root, TokenId(2));
        assert_eq!(chain.end, TokenId(2));
        assert_eq!(chain.text, "like");
    }

    #[test]
    fn test_xcomp_chain_uses_surface_words() {
        // "I want to try to eat" -> lemma of the root, words of the complements
        let graph = build(
            &[("I", "I"), ("wanted", "want"), ("to", "to"), ("try", "try"), ("to", "to"), ("eating", "eat")],
            &[
                (0, 2, "root"),
                (2, 1, "nsubj"),
                (4, 3, "mark"),
                (2, 4, "xcomp"),
                (6, 5, "mark"),
                (4, 6, "xcomp"),
            ],
        );
        let chain = resolve_predicate(&graph).unwrap();
        assert_eq!(chain.text, "want to try to eating");
        assert_eq!(chain.end, TokenId(6));
    }

    #[test]
    fn test_xcomp_off_the_chain_is_ignored() {
        // The second xcomp hangs off the object, not the predicate
        let graph = build(
            &[("they", "they"), ("made", "make"), ("him", "he"), ("leave", "leave")],
            &[(0, 2, "root"), (2, 1, "nsubj"), (2, 3, "dobj"), (3, 4, "xcomp")],
        );
        assert_eq!(resolve_predicate(&graph).unwrap().text, "make");
    }

    #[test]
    fn test_missing_root() {
        let graph = build(&[("coffee", "coffee")], &[]);
        assert!(resolve_predicate(&graph).is_none());
    }
}
