//! Tokenization
//!
//! Splits segmented sentences into tagged tokens. Tokens keep their
//! sentence index so downstream transforms can regroup them without
//! re-segmenting.

use crate::model::LanguageModel;
use crate::nlp::segmenter::segment;
use crate::types::{PosTag, Token};

/// Tokenizer over a shared language model.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'m> {
    model: &'m LanguageModel,
}

impl<'m> Tokenizer<'m> {
    pub fn new(model: &'m LanguageModel) -> Self {
        Self { model }
    }

    /// Tokenize text into tagged, stopword-marked tokens in document order.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for sentence in segment(text) {
            let mut prev_pos: Option<PosTag> = None;
            for raw in sentence.text.split_whitespace() {
                let word: String = raw
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase();
                if word.is_empty() {
                    continue;
                }

                let pos = self.model.pos().tag(&word, prev_pos);
                let lemma = self.model.pos().lemma(&word, pos);
                let mut token = Token::new(word, lemma, pos, sentence.index, tokens.len());
                token.is_stopword = self.model.stopwords().is_stopword(&token.text);

                prev_pos = Some(pos);
                tokens.push(token);
            }
        }

        tokens
    }

    /// Tokens of one document grouped per sentence, preserving order.
    pub fn tokenize_sentences(&self, text: &str) -> Vec<Vec<Token>> {
        let tokens = self.tokenize(text);
        let sentence_count = tokens
            .last()
            .map(|t| t.sentence_idx + 1)
            .unwrap_or(0);

        let mut grouped: Vec<Vec<Token>> = vec![Vec::new(); sentence_count];
        for token in tokens {
            grouped[token.sentence_idx].push(token);
        }
        grouped
    }
}
