use gapping_graph::SentenceGraph;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::render::{render_filled, render_original};
use crate::{Detection, SkipReason};

/// Flat, serializable view of one annotated sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SentenceReport {
    pub sentence: u32,
    pub original: String,
    pub filled: String,
    /// 0 when no gap was found.
    pub pattern: u8,
    pub pattern_name: Option<&'static str>,
    pub gap: Option<u32>,
    pub fill: Option<String>,
    pub skipped: bool,
}

impl SentenceReport {
    /// `graph` should already carry the annotation written for `detection`.
    pub fn new(graph: &SentenceGraph, detection: &Detection) -> Self {
        let gap = detection.gap();
        Self {
            sentence: graph.id().0,
            original: render_original(graph),
            filled: render_filled(graph),
            pattern: detection.pattern_id(),
            pattern_name: gap.map(|g| g.pattern.name()),
            gap: gap.map(|g| g.gap.0),
            fill: gap.map(|g| g.text.clone()),
            skipped: matches!(detection, Detection::NotAnnotatable(SkipReason::MissingRoot)),
        }
    }
}
