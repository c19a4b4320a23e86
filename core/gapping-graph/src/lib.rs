//! Per-sentence dependency arena.
//!
//! A [`SentenceGraph`] owns the tokens of one sentence and an immutable index
//! of its dependency edges (by governor and by relation). The only thing that
//! can change after construction is the annotation slot attached to each token.

pub mod document;
pub mod edge;
pub mod error;

use std::collections::HashMap;

use gapping_protocol::{ParsedSentence, RelationKind, RelationLabel, SentenceId, Token, TokenId};
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

pub use document::{Document, RejectedSentence};
pub use edge::Edge;
pub use error::GraphError;

#[derive(Debug)]
pub struct SentenceGraph {
    id: SentenceId,
    tokens: Vec<Token>,
    // Node `i` is `TokenId(i)`; node 0 is the synthetic root.
    graph: Graph<TokenId, RelationLabel, Directed>,
    // All edges, ascending by dependent index
    ordered: Vec<EdgeIndex>,
    by_relation: HashMap<RelationKind, Vec<EdgeIndex>>,
    root: Option<EdgeIndex>,
    annotations: Vec<Option<String>>,
}

impl SentenceGraph {
    /// Validate the upstream output and index it.
    pub fn new(parsed: ParsedSentence) -> Result<Self, GraphError> {
        let ParsedSentence {
            id,
            tokens,
            dependencies,
        } = parsed;

        for (position, token) in tokens.iter().enumerate() {
            let expected = TokenId::from_position(position);
            if token.index != expected {
                return Err(GraphError::TokenIndexMismatch {
                    position,
                    expected: expected.0,
                    found: token.index.0,
                });
            }
        }

        let len = tokens.len();
        let mut graph: Graph<TokenId, RelationLabel, Directed> =
            Graph::with_capacity(len + 1, dependencies.len());
        for i in 0..=len {
            graph.add_node(TokenId(i as u32));
        }

        let mut governed = vec![false; len + 1];
        let mut root = None;

        for dep in dependencies {
            let governor = dep.governor.0;
            let dependent = dep.dependent.0;

            if governor as usize > len {
                return Err(GraphError::GovernorOutOfRange { governor, len });
            }
            if dep.dependent.is_root() {
                return Err(GraphError::RootAsDependent { governor });
            }
            if dependent as usize > len {
                return Err(GraphError::DependentOutOfRange { dependent, len });
            }
            if governor == dependent {
                return Err(GraphError::SelfLoop { token: dependent });
            }
            if governed[dependent as usize] {
                return Err(GraphError::MultipleGovernors { dependent });
            }
            governed[dependent as usize] = true;

            let is_root = dep.relation.is(RelationKind::Root);
            let index = graph.add_edge(
                NodeIndex::new(governor as usize),
                NodeIndex::new(dependent as usize),
                dep.relation,
            );

            if is_root {
                if root.is_some() {
                    return Err(GraphError::MultipleRoots { dependent });
                }
                root = Some(index);
            }
        }

        let mut ordered: Vec<EdgeIndex> = graph.edge_indices().collect();
        ordered.sort_by_key(|&e| graph.edge_endpoints(e).map(|(_, target)| target.index()));

        let mut by_relation: HashMap<RelationKind, Vec<EdgeIndex>> = HashMap::new();
        for &e in &ordered {
            by_relation.entry(graph[e].kind()).or_default().push(e);
        }

        Ok(Self {
            id,
            annotations: vec![None; len],
            tokens,
            graph,
            ordered,
            by_relation,
            root,
        })
    }

    pub fn id(&self) -> SentenceId {
        self.id
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        id.position().and_then(|p| self.tokens.get(p))
    }

    pub fn word(&self, id: TokenId) -> Option<&str> {
        self.token(id).map(|t| t.word.as_str())
    }

    pub fn lemma(&self, id: TokenId) -> Option<&str> {
        self.token(id).map(|t| t.lemma.as_str())
    }

    /// The edge labelled `root`, if the parser produced one.
    pub fn root(&self) -> Option<Edge<'_>> {
        self.root.map(|e| self.edge(e))
    }

    /// Every edge, ascending by dependent index.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.ordered.iter().map(move |&e| self.edge(e))
    }

    /// Edges governed by `governor`, ascending by dependent index.
    pub fn dependents_of(&self, governor: TokenId) -> Vec<Edge<'_>> {
        if governor.0 as usize >= self.graph.node_count() {
            return Vec::new();
        }

        let mut edges: Vec<Edge<'_>> = self
            .graph
            .edges_directed(NodeIndex::new(governor.0 as usize), Direction::Outgoing)
            .map(|e| self.edge(e.id()))
            .collect();
        edges.sort_by_key(|e| e.dependent);
        edges
    }

    /// Edges carrying a relation of `kind`, ascending by dependent index.
    pub fn edges_labeled(&self, kind: RelationKind) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.by_relation
            .get(&kind)
            .into_iter()
            .flatten()
            .map(move |&e| self.edge(e))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Attach a derived annotation to one token. Replaces any previous value.
    pub fn annotate(&mut self, id: TokenId, text: String) -> Result<(), GraphError> {
        let slot = id
            .position()
            .and_then(|p| self.annotations.get_mut(p))
            .ok_or(GraphError::NoSuchToken { token: id.0 })?;
        *slot = Some(text);
        Ok(())
    }

    pub fn annotation(&self, id: TokenId) -> Option<&str> {
        id.position()
            .and_then(|p| self.annotations.get(p))
            .and_then(|a| a.as_deref())
    }

    /// Annotated tokens in sentence order.
    pub fn annotations(&self) -> impl Iterator<Item = (TokenId, &str)> + '_ {
        self.annotations
            .iter()
            .enumerate()
            .filter_map(|(p, a)| a.as_deref().map(|text| (TokenId::from_position(p), text)))
    }

    fn edge(&self, index: EdgeIndex) -> Edge<'_> {
        let (source, target) = self
            .graph
            .edge_endpoints(index)
            .map(|(s, t)| (self.graph[s], self.graph[t]))
            .unwrap_or((TokenId::ROOT, TokenId::ROOT));

        Edge {
            governor: source,
            dependent: target,
            relation: &self.graph[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gapping_protocol::Dependency;

    fn sentence(words: &[(&str, &str)], deps: Vec<Dependency>) -> ParsedSentence {
        ParsedSentence {
            id: SentenceId(1),
            tokens: words
                .iter()
                .enumerate()
                .map(|(i, (w, l))| Token::new(i as u32 + 1, *w, *l))
                .collect(),
            dependencies: deps,
        }
    }

    // "Mary likes coffee ."
    fn likes_coffee() -> ParsedSentence {
        sentence(
            &[("Mary", "Mary"), ("likes", "like"), ("coffee", "coffee"), (".", ".")],
            vec![
                Dependency::new(2, 4, "punct"),
                Dependency::new(0, 2, "root"),
                Dependency::new(2, 3, "dobj"),
                Dependency::new(2, 1, "nsubj"),
            ],
        )
    }

    #[test]
    fn test_edges_sorted_by_dependent() {
        let graph = SentenceGraph::new(likes_coffee()).unwrap();

        let order: Vec<u32> = graph.edges().map(|e| e.dependent.0).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);

        let dependents: Vec<u32> = graph.dependents_of(TokenId(2)).iter().map(|e| e.dependent.0).collect();
        assert_eq!(dependents, vec![1, 3, 4]);
    }

    #[test]
    fn test_root_and_relation_lookup() {
        let graph = SentenceGraph::new(likes_coffee()).unwrap();

        let root = graph.root().unwrap();
        assert_eq!(root.governor, TokenId::ROOT);
        assert_eq!(root.dependent, TokenId(2));
        assert_eq!(graph.lemma(root.dependent), Some("like"));

        let objects: Vec<Edge> = graph.edges_labeled(RelationKind::Dobj).collect();
        assert_eq!(objects.len(), 1);
        assert_eq!(graph.word(objects[0].dependent), Some("coffee"));
        assert_eq!(graph.edges_labeled(RelationKind::Conj).count(), 0);
    }

    #[test]
    fn test_missing_root_is_not_an_error() {
        let parsed = sentence(&[("coffee", "coffee")], vec![]);
        let graph = SentenceGraph::new(parsed).unwrap();
        assert!(graph.root().is_none());
    }

    #[test]
    fn test_contract_violations() {
        let bad_index = ParsedSentence {
            id: SentenceId(1),
            tokens: vec![Token::new(2, "x", "x")],
            dependencies: vec![],
        };
        assert!(matches!(
            SentenceGraph::new(bad_index),
            Err(GraphError::TokenIndexMismatch { expected: 1, found: 2, .. })
        ));

        let two_heads = sentence(
            &[("a", "a"), ("b", "b")],
            vec![Dependency::new(0, 1, "root"), Dependency::new(1, 2, "dep"), Dependency::new(0, 2, "dep")],
        );
        assert_eq!(
            SentenceGraph::new(two_heads).unwrap_err(),
            GraphError::MultipleGovernors { dependent: 2 }
        );

        let out_of_range = sentence(&[("a", "a")], vec![Dependency::new(1, 5, "dep")]);
        assert_eq!(
            SentenceGraph::new(out_of_range).unwrap_err(),
            GraphError::DependentOutOfRange { dependent: 5, len: 1 }
        );

        let root_dependent = sentence(&[("a", "a")], vec![Dependency::new(1, 0, "dep")]);
        assert_eq!(
            SentenceGraph::new(root_dependent).unwrap_err(),
            GraphError::RootAsDependent { governor: 1 }
        );

        let loop_edge = sentence(&[("a", "a")], vec![Dependency::new(1, 1, "dep")]);
        assert_eq!(SentenceGraph::new(loop_edge).unwrap_err(), GraphError::SelfLoop { token: 1 });

        let two_roots = sentence(
            &[("a", "a"), ("b", "b")],
            vec![Dependency::new(0, 1, "root"), Dependency::new(0, 2, "root")],
        );
        assert_eq!(
            SentenceGraph::new(two_roots).unwrap_err(),
            GraphError::MultipleRoots { dependent: 2 }
        );
    }

    #[test]
    fn test_annotation_slot() {
        let mut graph = SentenceGraph::new(likes_coffee()).unwrap();
        assert_eq!(graph.annotations().count(), 0);

        graph.annotate(TokenId(4), "like".to_string()).unwrap();
        assert_eq!(graph.annotation(TokenId(4)), Some("like"));
        assert_eq!(graph.annotations().collect::<Vec<_>>(), vec![(TokenId(4), "like")]);

        // The synthetic root and out-of-range tokens have no slot
        assert!(graph.annotate(TokenId::ROOT, "x".to_string()).is_err());
        assert!(graph.annotate(TokenId(9), "x".to_string()).is_err());
    }

    #[test]
    fn test_document_keeps_valid_sentences() {
        let mut broken = likes_coffee();
        broken.id = SentenceId(2);
        broken.dependencies.push(Dependency::new(0, 3, "root"));

        let (document, rejected) = Document::from_parsed(vec![likes_coffee(), broken]);
        assert_eq!(document.len(), 1);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].id, SentenceId(2));
    }
}
