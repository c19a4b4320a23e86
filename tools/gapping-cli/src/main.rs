use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gapping_annotator::{render_filled, render_original, Annotator, GappingAnnotator, SentenceReport};
use gapping_conllu::{decode_treebank, encode_treebank, read_conllu};
use gapping_graph::Document;
use gapping_protocol::Treebank;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about = "Detects gapping ellipsis in dependency-parsed sentences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a parsed treebank into the binary archive format
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Input format (guessed from the extension when omitted)
        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,
    },
    /// Annotate every sentence and print it with its gap filled in
    Annotate {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_enum)]
        format: Option<InputFormat>,

        /// Print a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    Conllu,
    Json,
    Archive,
}

impl InputFormat {
    fn guess(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => InputFormat::Json,
            Some("rkyv") | Some("bin") => InputFormat::Archive,
            _ => InputFormat::Conllu,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output, format } => compile(&input, &output, format),
        Command::Annotate { input, format, json } => annotate(&input, format, json),
    }
}

fn load_treebank(path: &Path, format: Option<InputFormat>) -> anyhow::Result<Treebank> {
    let format = format.unwrap_or_else(|| InputFormat::guess(path));
    info!(path = %path.display(), ?format, "reading treebank");

    let treebank = match format {
        InputFormat::Conllu => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Treebank::new(read_conllu(&text)?)
        }
        InputFormat::Json => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Treebank>(&text).context("parsing JSON treebank")?
        }
        InputFormat::Archive => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            decode_treebank(&bytes)?
        }
    };
    Ok(treebank)
}

fn compile(input: &Path, output: &Path, format: Option<InputFormat>) -> anyhow::Result<()> {
    let treebank = load_treebank(input, format)?;
    info!(
        version = treebank.version,
        sentences = treebank.sentences.len(),
        "compiling treebank"
    );

    let bytes = encode_treebank(&treebank)?;
    fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;

    info!(path = %output.display(), "archive written");
    Ok(())
}

fn annotate(input: &Path, format: Option<InputFormat>, json: bool) -> anyhow::Result<()> {
    let treebank = load_treebank(input, format)?;

    let (mut document, rejected) = Document::from_parsed(treebank.sentences);
    for r in &rejected {
        warn!(sentence = r.id.0, error = %r.error, "sentence rejected");
    }

    let annotator = GappingAnnotator::default();

    if json {
        let reports: Vec<SentenceReport> = document
            .sentences_mut()
            .iter_mut()
            .map(|graph| {
                let detection = annotator.annotate_sentence(graph);
                SentenceReport::new(graph, &detection)
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let summary = annotator.annotate(&mut document);
    info!(
        annotated = summary.annotated,
        unmatched = summary.unmatched,
        skipped = summary.skipped,
        "annotation finished"
    );

    for graph in document.sentences() {
        println!("Original Sentence: {}", render_original(graph));
        println!("New Sentence: {}\n", render_filled(graph));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_guess() {
        assert_eq!(InputFormat::guess(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::guess(Path::new("a.rkyv")), InputFormat::Archive);
        assert_eq!(InputFormat::guess(Path::new("a.conllu")), InputFormat::Conllu);
        assert_eq!(InputFormat::guess(Path::new("a")), InputFormat::Conllu);
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["gapping", "annotate", "-i", "in.conllu", "--json"]).unwrap();
        match cli.command {
            Command::Annotate { input, format, json } => {
                assert_eq!(input, PathBuf::from("in.conllu"));
                assert_eq!(format, None);
                assert!(json);
            }
            _ => panic!("Expected annotate"),
        }
    }

    #[test]
    fn test_json_treebank_shape() {
        let json = r#"{
            "version": 1,
            "sentences": [{
                "id": 1,
                "tokens": [{"index": 1, "word": "Mary", "lemma": "Mary"}, {"index": 2, "word": "sleeps", "lemma": "sleep"}],
                "dependencies": [{"governor": 0, "dependent": 2, "relation": "root"}, {"governor": 2, "dependent": 1, "relation": "nsubj"}]
            }]
        }"#;
        let treebank: Treebank = serde_json::from_str(json).unwrap();
        assert_eq!(treebank.sentences[0].dependencies[1].relation.as_str(), "nsubj");
    }
}
