use gapping_protocol::{ParsedSentence, SentenceId};

use crate::{GraphError, SentenceGraph};

/// A sentence the upstream pipeline produced but that could not be turned into a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSentence {
    pub id: SentenceId,
    pub error: GraphError,
}

/// The sentences of one document, each owning its own graph.
#[derive(Debug, Default)]
pub struct Document {
    sentences: Vec<SentenceGraph>,
}

impl Document {
    /// Builds every sentence that satisfies the contract; the rest are returned
    /// alongside so one bad sentence never sinks the whole document.
    pub fn from_parsed(parsed: Vec<ParsedSentence>) -> (Self, Vec<RejectedSentence>) {
        let mut sentences = Vec::with_capacity(parsed.len());
        let mut rejected = Vec::new();

        for sentence in parsed {
            let id = sentence.id;
            match SentenceGraph::new(sentence) {
                Ok(graph) => sentences.push(graph),
                Err(error) => rejected.push(RejectedSentence { id, error }),
            }
        }

        (Self { sentences }, rejected)
    }

    pub fn sentences(&self) -> &[SentenceGraph] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [SentenceGraph] {
        &mut self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
