use alloc::string::String;
use core::fmt;

use bitflags::bitflags;
use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Grammatical relations the gapping classifier distinguishes.
/// Every other label collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum RelationKind {
    Root = 0,
    Xcomp = 1,  // Open clausal complement
    Dobj = 2,   // Direct object
    Conj = 3,   // Coordination
    Punct = 4,
    Advmod = 5,
    Advcl = 6,
    Cop = 7,    // Copula
    Nsubj = 8,
    Amod = 9,
    Appos = 10,
    Dep = 11,   // Unspecified dependency
    Nmod = 12,  // Whole nmod family (nmod, nmod:tmod, nmod:poss, ...)
    Other = 13,
}

impl RelationKind {
    /// Exact match for every kind except the `nmod` family, which matches by prefix.
    pub fn classify(label: &str) -> Self {
        match label {
            "root" => RelationKind::Root,
            "xcomp" => RelationKind::Xcomp,
            "dobj" => RelationKind::Dobj,
            "conj" => RelationKind::Conj,
            "punct" => RelationKind::Punct,
            "advmod" => RelationKind::Advmod,
            "advcl" => RelationKind::Advcl,
            "cop" => RelationKind::Cop,
            "nsubj" => RelationKind::Nsubj,
            "amod" => RelationKind::Amod,
            "appos" => RelationKind::Appos,
            "dep" => RelationKind::Dep,
            l if l.starts_with("nmod") => RelationKind::Nmod,
            _ => RelationKind::Other,
        }
    }
}

/// A relation label as produced by the parser, e.g. `nmod:tmod`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
#[archive(check_bytes)]
pub struct RelationLabel {
    kind: RelationKind,
    text: String,
}

impl RelationLabel {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            kind: RelationKind::classify(&text),
            text,
        }
    }

    pub fn kind(&self) -> RelationKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is(&self, kind: RelationKind) -> bool {
        self.kind == kind
    }

    /// Possessive subtypes (`nmod:poss`) are excluded from some modifier searches.
    pub fn is_possessive(&self) -> bool {
        self.text.contains("poss")
    }
}

impl From<&str> for RelationLabel {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RelationLabel {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<RelationLabel> for String {
    fn from(label: RelationLabel) -> String {
        label.text
    }
}

impl fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

bitflags! {
    /// Filter over relation kinds, used when gathering seed and expansion edges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RelationSet: u16 {
        const ROOT = 1 << 0;
        const XCOMP = 1 << 1;
        const DOBJ = 1 << 2;
        const CONJ = 1 << 3;
        const PUNCT = 1 << 4;
        const ADVMOD = 1 << 5;
        const ADVCL = 1 << 6;
        const COP = 1 << 7;
        const NSUBJ = 1 << 8;
        const AMOD = 1 << 9;
        const APPOS = 1 << 10;
        const DEP = 1 << 11;
        const NMOD = 1 << 12;
        const OTHER = 1 << 13;

        // Adjunct-like modifiers that can carry the contrast in a gapped conjunct
        const MODIFIER = Self::NMOD.bits() | Self::ADVCL.bits() | Self::ADVMOD.bits();
    }
}

impl RelationSet {
    pub fn admits(self, label: &RelationLabel) -> bool {
        self.intersects(label.kind().into())
    }
}

impl From<RelationKind> for RelationSet {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Root => RelationSet::ROOT,
            RelationKind::Xcomp => RelationSet::XCOMP,
            RelationKind::Dobj => RelationSet::DOBJ,
            RelationKind::Conj => RelationSet::CONJ,
            RelationKind::Punct => RelationSet::PUNCT,
            RelationKind::Advmod => RelationSet::ADVMOD,
            RelationKind::Advcl => RelationSet::ADVCL,
            RelationKind::Cop => RelationSet::COP,
            RelationKind::Nsubj => RelationSet::NSUBJ,
            RelationKind::Amod => RelationSet::AMOD,
            RelationKind::Appos => RelationSet::APPOS,
            RelationKind::Dep => RelationSet::DEP,
            RelationKind::Nmod => RelationSet::NMOD,
            RelationKind::Other => RelationSet::OTHER,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationKind::Root => "root",
            RelationKind::Xcomp => "xcomp",
            RelationKind::Dobj => "dobj",
            RelationKind::Conj => "conj",
            RelationKind::Punct => "punct",
            RelationKind::Advmod => "advmod",
            RelationKind::Advcl => "advcl",
            RelationKind::Cop => "cop",
            RelationKind::Nsubj => "nsubj",
            RelationKind::Amod => "amod",
            RelationKind::Appos => "appos",
            RelationKind::Dep => "dep",
            RelationKind::Nmod => "nmod",
            RelationKind::Other => "other",
        };
        f.write_str(name)
    }
}
