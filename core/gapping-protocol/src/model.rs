use alloc::string::String;
use alloc::vec::Vec;
use rkyv::{Archive, Deserialize, Serialize};

use crate::ids::{SentenceId, TokenId};
use crate::relation::RelationLabel;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Token {
    pub index: TokenId,
    pub word: String,
    pub lemma: String,
}

impl Token {
    pub fn new(index: u32, word: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            index: TokenId(index),
            word: word.into(),
            lemma: lemma.into(),
        }
    }
}

/// One governor -> dependent edge of a dependency tree.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Dependency {
    pub governor: TokenId,
    pub dependent: TokenId,
    pub relation: RelationLabel,
}

impl Dependency {
    pub fn new(governor: u32, dependent: u32, relation: impl Into<RelationLabel>) -> Self {
        Self {
            governor: TokenId(governor),
            dependent: TokenId(dependent),
            relation: relation.into(),
        }
    }
}

/// Output of the upstream pipeline for a single sentence.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParsedSentence {
    pub id: SentenceId,
    pub tokens: Vec<Token>,
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Treebank {
    pub version: u32,
    pub sentences: Vec<ParsedSentence>,
}

impl Treebank {
    pub const VERSION: u32 = 1;

    pub fn new(sentences: Vec<ParsedSentence>) -> Self {
        Self {
            version: Self::VERSION,
            sentences,
        }
    }
}
