//! Gapping ellipsis detection.
//!
//! Per sentence: resolve the predicate chain, collect the seed edges around
//! it, match them against the signature catalog, build the fill text and
//! attach it to the gap token. Sentences never share state.

pub mod annotator;
pub mod catalog;
pub mod fill;
pub mod predicate;
pub mod render;
pub mod report;
pub mod seeds;

use gapping_graph::SentenceGraph;
use tracing::debug;

pub use annotator::{write_fill, AnnotationSummary, Annotator, GappingAnnotator, Requirement};
pub use catalog::{classify, GappingPattern, PatternMatch, Signature};
pub use fill::{object_span, synthesize, GapFill};
pub use predicate::{resolve_predicate, PredicateChain};
pub use render::{render_filled, render_original};
pub use report::SentenceReport;
pub use seeds::collect_seeds;

/// Why a sentence could not be analysed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Gap(GapFill),
    NoMatch,
    NotAnnotatable(SkipReason),
}

impl Detection {
    /// 1..=10 for a gap, 0 otherwise.
    pub fn pattern_id(&self) -> u8 {
        match self {
            Detection::Gap(fill) => fill.pattern.id(),
            _ => 0,
        }
    }

    pub fn gap(&self) -> Option<&GapFill> {
        match self {
            Detection::Gap(fill) => Some(fill),
            _ => None,
        }
    }
}

/// Classify one sentence without touching it.
pub fn detect(graph: &SentenceGraph) -> Detection {
    let Some(chain) = resolve_predicate(graph) else {
        debug!(sentence = graph.id().0, "no root edge, sentence skipped");
        return Detection::NotAnnotatable(SkipReason::MissingRoot);
    };

    let seeds = collect_seeds(graph, &chain);
    match classify(graph, &seeds) {
        Some(matched) => {
            let fill = synthesize(graph, &chain, &matched);
            debug!(
                sentence = graph.id().0,
                pattern = fill.pattern.id(),
                gap = fill.gap.0,
                fill = %fill.text,
                "gapping detected"
            );
            Detection::Gap(fill)
        }
        None => Detection::NoMatch,
    }
}
