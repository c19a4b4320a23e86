use gapping_graph::{Document, GraphError, SentenceGraph};
use tracing::{debug, warn};

use crate::fill::GapFill;
use crate::{detect, Detection};

/// Analyses a hosting pipeline can declare as prerequisites or products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    Tokenize,
    SentenceSplit,
    PartOfSpeech,
    Lemma,
    DependencyParse,
    GappingEllipsis,
}

/// A pipeline stage that enriches an already analysed document in place.
pub trait Annotator {
    fn name(&self) -> &str;

    /// Analyses that must have run before this one.
    fn requires(&self) -> &'static [Requirement];

    /// Analyses this stage makes available.
    fn satisfies(&self) -> &'static [Requirement];

    fn annotate(&self, document: &mut Document) -> AnnotationSummary;
}

/// Per-document counts, mostly for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub annotated: usize,
    pub unmatched: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct GappingAnnotator {
    name: String,
}

impl GappingAnnotator {
    pub const DEFAULT_NAME: &'static str = "gapellipsis";

    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Detect and write the fill for a single sentence.
    pub fn annotate_sentence(&self, graph: &mut SentenceGraph) -> Detection {
        let detection = detect(graph);
        if let Detection::Gap(fill) = &detection {
            if let Err(e) = write_fill(graph, fill) {
                warn!(sentence = graph.id().0, error = %e, "could not attach gap fill");
            }
        }
        detection
    }
}

impl Default for GappingAnnotator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl Annotator for GappingAnnotator {
    fn name(&self) -> &str {
        &self.name
    }

    fn requires(&self) -> &'static [Requirement] {
        &[
            Requirement::Tokenize,
            Requirement::SentenceSplit,
            Requirement::PartOfSpeech,
            Requirement::Lemma,
            Requirement::DependencyParse,
        ]
    }

    fn satisfies(&self) -> &'static [Requirement] {
        &[Requirement::GappingEllipsis]
    }

    fn annotate(&self, document: &mut Document) -> AnnotationSummary {
        let mut summary = AnnotationSummary::default();

        for graph in document.sentences_mut() {
            match self.annotate_sentence(graph) {
                Detection::Gap(_) => summary.annotated += 1,
                Detection::NoMatch => summary.unmatched += 1,
                Detection::NotAnnotatable(_) => summary.skipped += 1,
            }
        }

        debug!(
            annotator = %self.name,
            annotated = summary.annotated,
            unmatched = summary.unmatched,
            skipped = summary.skipped,
            "document annotated"
        );
        summary
    }
}

/// Attach the fill text to the gap token.
pub fn write_fill(graph: &mut SentenceGraph, fill: &GapFill) -> Result<(), GraphError> {
    graph.annotate(fill.gap, fill.text.clone())
}
