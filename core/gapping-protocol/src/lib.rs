#![no_std] // The protocol is shared with the WASM build

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod relation;

pub use ids::{SentenceId, TokenId};
pub use relation::{RelationKind, RelationLabel, RelationSet};

pub mod model;
pub use model::*;
