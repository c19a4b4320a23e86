pub mod archive;
pub mod columns;
pub mod error;

use gapping_protocol::{Dependency, ParsedSentence, SentenceId, Token, TokenId};

use crate::columns::{parse_head, parse_id, TokenIdColumn};

pub use archive::{decode_treebank, encode_treebank};
pub use error::ReadError;

/// Read every sentence of a CoNLL-U document.
///
/// Comments, multiword token ranges and empty nodes are skipped. A `_` head
/// leaves the token unattached; a `_` lemma falls back to the word form.
/// Sentences are numbered from 1 in document order.
pub fn read_conllu(input: &str) -> Result<Vec<ParsedSentence>, ReadError> {
    let mut sentences = Vec::new();
    let mut builder = SentenceBuilder::default();

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() {
            builder.flush_into(&mut sentences);
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != columns::COLUMN_COUNT {
            return Err(ReadError::ColumnCount {
                line: line_no,
                found: fields.len(),
            });
        }

        let index = match parse_id(fields[columns::ID]) {
            Some(TokenIdColumn::Word(index)) => index,
            Some(TokenIdColumn::Range(..)) | Some(TokenIdColumn::Empty(..)) => continue,
            None => {
                return Err(ReadError::InvalidId {
                    line: line_no,
                    value: fields[columns::ID].to_string(),
                })
            }
        };

        let expected = TokenId::from_position(builder.tokens.len()).0;
        if index != expected {
            return Err(ReadError::OutOfOrder {
                line: line_no,
                expected,
                found: index,
            });
        }

        let head = parse_head(fields[columns::HEAD]).ok_or_else(|| ReadError::InvalidHead {
            line: line_no,
            value: fields[columns::HEAD].to_string(),
        })?;

        let form = fields[columns::FORM];
        let lemma = match fields[columns::LEMMA] {
            "_" if form != "_" => form,
            lemma => lemma,
        };
        builder.tokens.push(Token::new(index, form, lemma));

        if let Some(governor) = head {
            builder
                .dependencies
                .push(Dependency::new(governor, index, fields[columns::DEPREL]));
        }
    }

    builder.flush_into(&mut sentences);
    Ok(sentences)
}

#[derive(Default)]
struct SentenceBuilder {
    tokens: Vec<Token>,
    dependencies: Vec<Dependency>,
}

impl SentenceBuilder {
    fn flush_into(&mut self, sentences: &mut Vec<ParsedSentence>) {
        if self.tokens.is_empty() {
            return;
        }
        sentences.push(ParsedSentence {
            id: SentenceId(sentences.len() as u32 + 1),
            tokens: std::mem::take(&mut self.tokens),
            dependencies: std::mem::take(&mut self.dependencies),
        });
    }
}
