use gapping_protocol::{RelationKind, RelationLabel, RelationSet, TokenId};

/// Borrowed view of one edge of a [`SentenceGraph`](crate::SentenceGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    pub governor: TokenId,
    pub dependent: TokenId,
    pub relation: &'a RelationLabel,
}

impl<'a> Edge<'a> {
    pub fn kind(&self) -> RelationKind {
        self.relation.kind()
    }

    pub fn is(&self, kind: RelationKind) -> bool {
        self.relation.is(kind)
    }

    pub fn is_in(&self, set: RelationSet) -> bool {
        set.admits(self.relation)
    }
}
