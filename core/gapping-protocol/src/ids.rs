use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[archive(check_bytes)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

define_id!(TokenId, "1-based position of a token in its sentence. `TokenId(0)` is the synthetic root.");
define_id!(SentenceId, "Identifier for a sentence within a document or treebank.");

impl TokenId {
    /// The synthetic root every dependency tree hangs from.
    pub const ROOT: TokenId = TokenId(0);

    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Offset into the sentence's token sequence, `None` for the synthetic root.
    pub fn position(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    pub fn from_position(position: usize) -> Self {
        Self(position as u32 + 1)
    }
}
