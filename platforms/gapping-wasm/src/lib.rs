use gapping_annotator::{GappingAnnotator, SentenceReport};
use gapping_conllu::{decode_treebank, read_conllu};
use gapping_graph::{Document, RejectedSentence};
use gapping_protocol::ParsedSentence;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
pub struct RejectedReport {
    pub sentence: u32,
    pub message: String,
}

impl From<RejectedSentence> for RejectedReport {
    fn from(r: RejectedSentence) -> Self {
        Self {
            sentence: r.id.0,
            message: r.error.to_string(),
        }
    }
}

/// The structured response sent back to JavaScript
#[derive(Serialize)]
pub struct AnalysisReport {
    pub sentences: Vec<SentenceReport>,
    pub rejected: Vec<RejectedReport>,
    pub debug_info: String,
}

#[wasm_bindgen]
pub struct GappingEngine {
    annotator: GappingAnnotator,
}

impl Default for GappingEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GappingEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            annotator: GappingAnnotator::default(),
        }
    }

    /// CoNLL-U text -> report
    pub fn annotate_conllu(&self, input: &str) -> Result<JsValue, JsValue> {
        let parsed = read_conllu(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&self.analyze(parsed))
    }

    /// Binary treebank (fetched by JS) -> report. The archive is validated before use.
    pub fn annotate_archive(&self, data: Vec<u8>) -> Result<JsValue, JsValue> {
        let treebank = decode_treebank(&data).map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&self.analyze(treebank.sentences))
    }
}

impl GappingEngine {
    pub fn analyze(&self, parsed: Vec<ParsedSentence>) -> AnalysisReport {
        let (mut document, rejected) = Document::from_parsed(parsed);

        let sentences: Vec<SentenceReport> = document
            .sentences_mut()
            .iter_mut()
            .map(|graph| {
                let detection = self.annotator.annotate_sentence(graph);
                SentenceReport::new(graph, &detection)
            })
            .collect();

        let gaps = sentences.iter().filter(|s| s.pattern != 0).count();
        AnalysisReport {
            debug_info: format!("Sentences: {}, Gaps: {}, Rejected: {}", sentences.len(), gaps, rejected.len()),
            sentences,
            rejected: rejected.into_iter().map(RejectedReport::from).collect(),
        }
    }
}

fn to_js(report: &AnalysisReport) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(report).map_err(JsValue::from)
}
