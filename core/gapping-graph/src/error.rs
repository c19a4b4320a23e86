use thiserror::Error;

/// Violations of the upstream contract found while building a sentence graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("token at position {position} carries index {found}, expected {expected}")]
    TokenIndexMismatch {
        position: usize,
        expected: u32,
        found: u32,
    },

    #[error("governor {governor} is out of range (sentence has {len} tokens)")]
    GovernorOutOfRange { governor: u32, len: usize },

    #[error("dependent {dependent} is out of range (sentence has {len} tokens)")]
    DependentOutOfRange { dependent: u32, len: usize },

    #[error("the synthetic root cannot be a dependent (governor {governor})")]
    RootAsDependent { governor: u32 },

    #[error("token {token} governs itself")]
    SelfLoop { token: u32 },

    #[error("token {dependent} has more than one governor")]
    MultipleGovernors { dependent: u32 },

    #[error("more than one root edge (second one points at token {dependent})")]
    MultipleRoots { dependent: u32 },

    #[error("cannot annotate token {token}: no such token")]
    NoSuchToken { token: u32 },
}
